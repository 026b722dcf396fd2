use crate::api::notifier::LeaderNotifier;
use crate::api::options::{GatewayOptions, GatewayOptionsValidated};
use crate::connection::ConnectionManager;
use crate::error::GatewayError;
use crate::submitter::RequestSubmitter;
use crate::tracker::{LeaderTracker, NotificationOutcome};
use crate::transport::{Transport, TransportError};
use crate::types::{Argument, LeaderInfo, Member, Term};
use std::convert::TryFrom;
use std::sync::Arc;
use tokio::time::Duration;

pub struct GatewayConfig {
    pub info_logger: slog::Logger,
    pub transport: Arc<dyn Transport>,
    pub options: GatewayOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayCreationError {
    #[error("Illegal options for configuring gateway: {0}")]
    IllegalOptions(String),
}

pub fn try_create_gateway(config: GatewayConfig) -> Result<Gateway, GatewayCreationError> {
    let options = GatewayOptionsValidated::try_from(config.options)
        .map_err(|e| GatewayCreationError::IllegalOptions(e.to_string()))?;

    let root_logger = config.info_logger;
    slog::info!(root_logger, "Creating store gateway with {:?}", options);

    let connections = ConnectionManager::new(
        root_logger.new(slog::o!("Component" => "ConnectionManager")),
        config.transport,
    );
    let tracker = Arc::new(LeaderTracker::new(
        root_logger.new(slog::o!("Component" => "LeaderTracker")),
        connections,
    ));
    let submitter = RequestSubmitter::new(
        root_logger.new(slog::o!("Component" => "RequestSubmitter")),
        tracker.subscriber(),
        options.submit_timeout,
        options.leader_wait_timeout,
        options.cancel_in_flight_on_swap,
    );

    Ok(Gateway { tracker, submitter })
}

/// Gateway is a client of the store cluster's current leader. Clones share the same leader state
/// and connection.
///
/// The connection is released by `shutdown()`, or at the latest when the last clone is dropped.
#[derive(Clone)]
pub struct Gateway {
    tracker: Arc<LeaderTracker>,
    submitter: RequestSubmitter,
}

impl Gateway {
    /// Submits `operation` to the current leader and decodes its result as `T`. Waits for a leader
    /// first if none is known. Never retries.
    pub async fn submit<T>(&self, operation: &str, arguments: Vec<Argument>) -> Result<T, GatewayError>
    where
        T: prost::Message + Default,
    {
        self.submitter.submit(operation, arguments).await
    }

    pub async fn wait_for_leader(&self, deadline: Option<Duration>) -> Result<LeaderInfo, GatewayError> {
        self.submitter
            .wait_for_leader(deadline)
            .await
            .map(|snapshot| snapshot.info())
    }

    pub fn leader(&self) -> Option<LeaderInfo> {
        self.tracker.leader()
    }

    pub fn notifier(&self) -> LeaderNotifier {
        LeaderNotifier::new(self.tracker.clone())
    }

    pub async fn leader_elected(&self, candidate: Member, term: Term) -> Result<NotificationOutcome, TransportError> {
        self.tracker.on_leader_notification(candidate, term).await
    }

    /// Closes the leader connection and stops accepting notifications. Pending and future
    /// submits fail with `GatewayClosed`.
    pub async fn shutdown(&self) {
        self.tracker.shutdown().await
    }
}
