mod api;
mod grpc;

pub use api::Connection;
pub use api::Transport;
pub use api::TransportError;
pub use grpc::GrpcTransport;
pub use grpc::LeaderElectDecodeError;

pub(crate) use grpc::convert_leader_elect_event;
pub(crate) use grpc::decode_leader_elect_event;
