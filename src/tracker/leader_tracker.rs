use crate::connection::ConnectionManager;
use crate::tracker::snapshot::{self, LeaderPublisher, LeaderSnapshot, LeaderSubscriber, PublishedLeader};
use crate::transport::{self, LeaderElectDecodeError, TransportError};
use crate::types::{LeaderInfo, Member, Term};
use std::sync::Arc;
use tokio::sync::Mutex;

/// What a leader notification did to the tracked state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NotificationOutcome {
    /// Connected to a new leader and made it current.
    NewLeader,
    /// The current leader was re-elected under a newer term. Connection is kept.
    ///
    /// Unlike a plain "ignore the current member" rule, this records the newer term, so a later
    /// notification for another member under an older term stays stale.
    TermRefreshed,
    /// Term was not newer than the tracked one. Nothing changed.
    Stale,
    /// The election produced no leader. Nothing changed.
    NoLeader,
    /// Gateway has shut down. Nothing changed.
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Failed to decode leader notification")]
    Decode(#[from] LeaderElectDecodeError),

    // State is unchanged, so redelivering the same notification may succeed.
    #[error("Failed to connect to new leader")]
    Connect(#[from] TransportError),
}

/// LeaderTracker owns the current leader state. It is the only writer of that state; request
/// code only ever reads it through a `LeaderSubscriber`.
pub(crate) struct LeaderTracker {
    logger: slog::Logger,
    connections: ConnectionManager,
    // Held for the whole of a swap, so notifications are applied strictly one at a time.
    writer: Mutex<WriterState>,
    publisher: LeaderPublisher,
    subscriber: LeaderSubscriber,
}

#[derive(Default)]
struct WriterState {
    current: Option<Arc<LeaderSnapshot>>,
    closed: bool,
}

impl WriterState {
    fn current_term(&self) -> Term {
        self.current.as_ref().map_or(Term::zero(), |s| s.term)
    }

    fn is_current_member(&self, candidate: &Member) -> bool {
        self.current.as_ref().map_or(false, |s| &s.member == candidate)
    }
}

impl LeaderTracker {
    pub(crate) fn new(logger: slog::Logger, connections: ConnectionManager) -> Self {
        let (publisher, subscriber) = snapshot::new();

        LeaderTracker {
            logger,
            connections,
            writer: Mutex::new(WriterState::default()),
            publisher,
            subscriber,
        }
    }

    pub(crate) fn subscriber(&self) -> LeaderSubscriber {
        self.subscriber.clone()
    }

    pub(crate) fn leader(&self) -> Option<LeaderInfo> {
        match self.subscriber.current() {
            PublishedLeader::Elected(snapshot) => Some(snapshot.info()),
            _ => None,
        }
    }

    pub(crate) async fn on_leader_notification(
        &self,
        candidate: Member,
        term: Term,
    ) -> Result<NotificationOutcome, TransportError> {
        let mut writer = self.writer.lock().await;
        if writer.closed {
            slog::debug!(self.logger, "Gateway closed, dropping notification for {} term {:?}", candidate, term);
            return Ok(NotificationOutcome::Closed);
        }

        let current_term = writer.current_term();
        if term <= current_term {
            slog::warn!(
                self.logger,
                "Ignoring stale leader notification. Leader: {}, term: {:?}, current term: {:?}",
                candidate,
                term,
                current_term
            );
            return Ok(NotificationOutcome::Stale);
        }

        if writer.is_current_member(&candidate) {
            return Ok(self.refresh_term(&mut writer, term));
        }

        slog::info!(self.logger, "New leader detected. Leader: {}, term: {:?}", candidate, term);

        // Open before publishing: nobody may observe a leader without an open connection.
        let connection = match self.connections.open(&candidate).await {
            Ok(connection) => connection,
            Err(e) => {
                slog::warn!(self.logger, "Failed to connect to new leader {}: {}", candidate, e);
                return Err(e);
            }
        };

        let snapshot = Arc::new(LeaderSnapshot::new(candidate, term, connection));
        let previous = writer.current.replace(snapshot.clone());
        self.publisher.publish(PublishedLeader::Elected(snapshot));

        // Close the old connection only once the new one is visible.
        if let Some(previous) = previous {
            previous.connection.close();
        }

        Ok(NotificationOutcome::NewLeader)
    }

    fn refresh_term(&self, writer: &mut WriterState, term: Term) -> NotificationOutcome {
        let previous = match writer.current.take() {
            Some(previous) => previous,
            None => return NotificationOutcome::Stale,
        };

        slog::info!(
            self.logger,
            "Leader {} re-elected. Term: {:?} -> {:?}",
            previous.member,
            previous.term,
            term
        );

        let snapshot = Arc::new(LeaderSnapshot::new(
            previous.member.clone(),
            term,
            previous.connection.clone(),
        ));
        writer.current.replace(snapshot.clone());
        self.publisher.publish(PublishedLeader::Elected(snapshot));

        NotificationOutcome::TermRefreshed
    }

    /// Applies a leader election announcement as encoded on the cluster messaging bus.
    pub(crate) async fn handle_leader_elect_message(
        &self,
        payload: &[u8],
    ) -> Result<NotificationOutcome, NotificationError> {
        match transport::decode_leader_elect_event(payload)? {
            Some((candidate, term)) => Ok(self.on_leader_notification(candidate, term).await?),
            None => Ok(NotificationOutcome::NoLeader),
        }
    }

    /// Releases the current connection and stops accepting notifications. Waiters for a leader are
    /// woken and fail.
    pub(crate) async fn shutdown(&self) {
        let mut writer = self.writer.lock().await;
        if writer.closed {
            return;
        }

        writer.closed = true;
        let previous = writer.current.take();
        self.publisher.publish(PublishedLeader::Closed);

        if let Some(previous) = previous {
            previous.connection.close();
        }

        slog::info!(self.logger, "Leader tracker shut down");
    }
}
