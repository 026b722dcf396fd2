use crate::types::{Member, SubmitRequest, SubmitResponse};
use std::error::Error;

/// Transport opens connections to members of the store cluster. Implemented by whatever carries
/// requests to the consensus service; `GrpcTransport` is the one shipped with this crate.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn open_connection(&self, member: &Member) -> Result<Box<dyn Connection>, TransportError>;
}

/// Connection is an open channel to one member.
#[async_trait::async_trait]
pub trait Connection: Send + Sync {
    fn member(&self) -> &Member;

    async fn submit(&self, request: SubmitRequest) -> Result<SubmitResponse, TransportError>;

    /// Releases the channel. Callers guarantee this is invoked at most once.
    fn close(&self);
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to connect to {member}")]
    Connect {
        member: String,
        #[source]
        cause: Box<dyn Error + Send + Sync>,
    },

    #[error("Connection is closed")]
    Disconnected,

    // The request reached the store and the store failed to execute it.
    #[error("Store failed to execute request: {message}")]
    Remote { message: String },

    #[error("RPC failure: {0}")]
    Rpc(#[from] tonic::Status),

    #[error("Malformed message")]
    Decode(#[from] prost::DecodeError),
}
