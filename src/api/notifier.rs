use crate::tracker::{LeaderTracker, NotificationError, NotificationOutcome};
use crate::transport::TransportError;
use crate::types::{Member, Term};
use std::sync::Arc;

/// LeaderNotifier is the inbound side of the gateway. Hand it to whatever delivers leader
/// elections from the cluster. Deliveries may be duplicated or reordered; stale ones are dropped.
#[derive(Clone)]
pub struct LeaderNotifier {
    tracker: Arc<LeaderTracker>,
}

impl LeaderNotifier {
    pub(super) fn new(tracker: Arc<LeaderTracker>) -> Self {
        LeaderNotifier { tracker }
    }

    pub async fn leader_elected(&self, candidate: Member, term: Term) -> Result<NotificationOutcome, TransportError> {
        self.tracker.on_leader_notification(candidate, term).await
    }

    /// Same as `leader_elected()`, for an encoded `ProtoLeaderElectEvent` taken off the cluster
    /// messaging bus.
    pub async fn handle_leader_elect_message(&self, payload: &[u8]) -> Result<NotificationOutcome, NotificationError> {
        self.tracker.handle_leader_elect_message(payload).await
    }
}
