//! This mod holds the caller-facing API: constructing a gateway, feeding it leader notifications,
//! and the store operations on top of it.
mod gateway;
mod notifier;
mod options;
mod store_client;

pub use gateway::try_create_gateway;
pub use gateway::Gateway;
pub use gateway::GatewayConfig;
pub use gateway::GatewayCreationError;
pub use notifier::LeaderNotifier;
pub use options::GatewayOptions;
pub use store_client::StoreClient;
