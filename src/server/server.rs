use crate::api::LeaderNotifier;
use crate::grpc::leader_notifications_server::{LeaderNotifications, LeaderNotificationsServer};
use crate::grpc::{ProtoLeaderElectAck, ProtoLeaderElectEvent};
use crate::server::ShutdownSignal;
use crate::tracker::NotificationOutcome;
use crate::transport;
use std::net::SocketAddr;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

/// NotificationServer serves the `LeaderNotifications` gRPC interface, so cluster messaging can
/// push leader elections to the gateway.
pub struct NotificationServer {
    logger: slog::Logger,
    notifier: LeaderNotifier,
}

impl NotificationServer {
    pub fn new(logger: slog::Logger, notifier: LeaderNotifier) -> Self {
        NotificationServer { logger, notifier }
    }

    pub async fn run(self, socket_addr: SocketAddr, shutdown_signal: ShutdownSignal) -> Result<(), tonic::transport::Error> {
        let logger = self.logger.clone();
        slog::info!(logger, "Listening on '{:?}'", socket_addr);

        let result = Server::builder()
            .add_service(LeaderNotificationsServer::new(self))
            .serve_with_shutdown(socket_addr, shutdown_signal)
            .await;

        slog::info!(logger, "Server run() has exited: {:?}", result);
        result
    }

    async fn handle_leader_elected(&self, rpc_request: ProtoLeaderElectEvent) -> Result<ProtoLeaderElectAck, Status> {
        let leader = transport::convert_leader_elect_event(rpc_request)
            .map_err(|e| Status::invalid_argument(e.to_string()))?;

        let (candidate, term) = match leader {
            Some(leader) => leader,
            None => return Ok(ProtoLeaderElectAck { accepted: false }),
        };

        match self.notifier.leader_elected(candidate, term).await {
            Ok(outcome) => Ok(ProtoLeaderElectAck {
                accepted: matches!(
                    outcome,
                    NotificationOutcome::NewLeader | NotificationOutcome::TermRefreshed
                ),
            }),
            // Sender should redeliver; our state is unchanged.
            Err(e) => Err(Status::unavailable(e.to_string())),
        }
    }
}

#[async_trait::async_trait]
impl LeaderNotifications for NotificationServer {
    async fn leader_elected(
        &self,
        rpc_request_wrapped: Request<ProtoLeaderElectEvent>,
    ) -> Result<Response<ProtoLeaderElectAck>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_leader_elected(rpc_request).await;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }
}
