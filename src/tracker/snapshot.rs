use crate::connection::ManagedConnection;
use crate::types::{LeaderInfo, Member, Term};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;

/// LeaderSnapshot is the unit readers see: a leader, its term, and the open connection to it.
/// The three are only ever published together, and readers clone the whole `Arc` under the watch
/// channel's short read lock.
pub(crate) struct LeaderSnapshot {
    pub(crate) member: Member,
    pub(crate) term: Term,
    pub(crate) connection: Arc<ManagedConnection>,
    pub(crate) elected_at: DateTime<Utc>,
}

impl LeaderSnapshot {
    pub(super) fn new(member: Member, term: Term, connection: Arc<ManagedConnection>) -> Self {
        LeaderSnapshot {
            member,
            term,
            connection,
            elected_at: Utc::now(),
        }
    }

    pub(crate) fn info(&self) -> LeaderInfo {
        LeaderInfo {
            member: self.member.clone(),
            term: self.term,
            elected_at: self.elected_at,
        }
    }
}

#[derive(Clone)]
pub(crate) enum PublishedLeader {
    NotElected,
    Elected(Arc<LeaderSnapshot>),
    // Gateway has shut down. Terminal.
    Closed,
}

pub(super) fn new() -> (LeaderPublisher, LeaderSubscriber) {
    let (snd, rcv) = watch::channel(PublishedLeader::NotElected);

    (LeaderPublisher { snd }, LeaderSubscriber { rcv })
}

pub(super) struct LeaderPublisher {
    snd: watch::Sender<PublishedLeader>,
}

impl LeaderPublisher {
    pub(super) fn publish(&self, leader: PublishedLeader) {
        // The tracker holds a subscriber for its whole life, so this never fails.
        let _ = self.snd.send(leader);
    }
}

#[derive(Clone)]
pub(crate) struct LeaderSubscriber {
    rcv: watch::Receiver<PublishedLeader>,
}

impl LeaderSubscriber {
    /// One atomic read of the published state. `borrow()` takes the channel's read lock only for
    /// the `Arc` clone; it is never held across an await.
    pub(crate) fn current(&self) -> PublishedLeader {
        self.rcv.borrow().clone()
    }

    /// Suspends until a leader is published. Returns `None` if the gateway shuts down first.
    pub(crate) async fn elected(&mut self) -> Option<Arc<LeaderSnapshot>> {
        loop {
            match self.current() {
                PublishedLeader::Elected(snapshot) => return Some(snapshot),
                PublishedLeader::Closed => return None,
                PublishedLeader::NotElected => {}
            }

            if self.rcv.changed().await.is_err() {
                return None;
            }
        }
    }
}
