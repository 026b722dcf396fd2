mod leader_tracker;
mod snapshot;

pub use leader_tracker::NotificationError;
pub use leader_tracker::NotificationOutcome;
pub(crate) use leader_tracker::LeaderTracker;
pub(crate) use snapshot::LeaderSnapshot;
pub(crate) use snapshot::LeaderSubscriber;
pub(crate) use snapshot::PublishedLeader;
