use crate::transport::TransportError;
use crate::types::RequestId;
use tokio::time::Duration;

/// Errors surfaced to callers of `Gateway::submit()` and the `StoreClient` operations. Nothing is
/// retried before one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    // Safe to retry: nothing was sent.
    #[error("No leader elected within {0:?}")]
    NoLeaderAvailable(Duration),

    // The store may or may not have executed the request. Only retry idempotent operations.
    #[error("Request {request_id} got no response within {timeout:?}")]
    SubmissionTimeout { request_id: RequestId, timeout: Duration },

    #[error("Request {request_id} failed")]
    SubmissionFailed {
        request_id: RequestId,
        #[source]
        cause: SubmitFailure,
    },

    #[error("Gateway is shut down")]
    GatewayClosed,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Result could not be decoded")]
    Decode(#[from] prost::DecodeError),

    // Only with `cancel_in_flight_on_swap`.
    #[error("Leader changed while request was in flight")]
    Superseded,
}

impl GatewayError {
    pub(crate) fn failed(request_id: RequestId, cause: impl Into<SubmitFailure>) -> Self {
        GatewayError::SubmissionFailed {
            request_id,
            cause: cause.into(),
        }
    }

    /// False only when the store certainly did not execute the operation.
    pub fn may_have_executed(&self) -> bool {
        match self {
            GatewayError::SubmissionTimeout { .. } => true,
            GatewayError::SubmissionFailed {
                cause: SubmitFailure::Decode(_),
                ..
            } => true,
            GatewayError::SubmissionFailed {
                cause: SubmitFailure::Superseded,
                ..
            } => true,
            GatewayError::SubmissionFailed {
                cause: SubmitFailure::Transport(TransportError::Rpc(_)),
                ..
            } => true,
            _ => false,
        }
    }
}
