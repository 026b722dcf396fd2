mod api;
mod connection;
mod error;
mod server;
mod submitter;
mod tracker;
mod transport;
mod types;

#[cfg(test)]
mod test_utils;

mod grpc {
    include!("../generated/gateway.rs");
}
mod store {
    include!("../generated/store.rs");
}

pub use api::try_create_gateway;
pub use api::Gateway;
pub use api::GatewayConfig;
pub use api::GatewayCreationError;
pub use api::GatewayOptions;
pub use api::LeaderNotifier;
pub use api::StoreClient;
pub use error::GatewayError;
pub use error::SubmitFailure;
pub use server::shutdown_signal;
pub use server::NotificationServer;
pub use server::ShutdownHandle;
pub use server::ShutdownSignal;
pub use tracker::NotificationError;
pub use tracker::NotificationOutcome;
pub use transport::Connection;
pub use transport::GrpcTransport;
pub use transport::LeaderElectDecodeError;
pub use transport::Transport;
pub use transport::TransportError;
pub use types::Argument;
pub use types::LeaderInfo;
pub use types::Member;
pub use types::RequestId;
pub use types::SubmitRequest;
pub use types::SubmitResponse;
pub use types::Term;

// Store payloads. The gateway only encodes and decodes them.
pub use store::BatchReadRequest;
pub use store::BatchWriteRequest;
pub use store::ReadRequest;
pub use store::ReadResult;
pub use store::VersionedValue;
pub use store::WriteRequest;
pub use store::WriteResult;

// Wire protocol, for store executors and cluster messaging that speak to the gateway over gRPC.
pub mod proto {
    pub use crate::grpc::leader_notifications_client::LeaderNotificationsClient;
    pub use crate::grpc::store_protocol_server::{StoreProtocol, StoreProtocolServer};
    pub use crate::grpc::{
        proto_argument, proto_submit_response, ProtoArgument, ProtoLeaderElectAck, ProtoLeaderElectEvent, ProtoMember,
        ProtoSubmitRequest, ProtoSubmitResponse,
    };
    pub use crate::store::{CreateTableResult, Empty, ReadResults, TableNames, TableSnapshot, WriteResults};
}
