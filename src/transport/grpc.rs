use crate::grpc::store_protocol_client::StoreProtocolClient;
use crate::grpc::{
    proto_argument, proto_submit_response, ProtoArgument, ProtoLeaderElectEvent, ProtoMember, ProtoSubmitRequest,
    ProtoSubmitResponse,
};
use crate::transport::{Connection, Transport, TransportError};
use crate::types::{Argument, Member, RequestId, SubmitRequest, SubmitResponse, Term};
use bytes::Bytes;
use prost::Message;
use std::convert::TryFrom;
use std::net::SocketAddr;
use std::sync::Mutex;
use tonic::transport::{Channel, Endpoint};

/// GrpcTransport connects to store members that serve the `StoreProtocol` gRPC service.
pub struct GrpcTransport {
    logger: slog::Logger,
}

impl GrpcTransport {
    pub fn new(logger: slog::Logger) -> Self {
        GrpcTransport { logger }
    }
}

#[async_trait::async_trait]
impl Transport for GrpcTransport {
    async fn open_connection(&self, member: &Member) -> Result<Box<dyn Connection>, TransportError> {
        let url = format!("http://{}", member.endpoint);
        slog::info!(self.logger, "Connecting to {} ...", url);

        let connect_error = |cause: Box<dyn std::error::Error + Send + Sync>| TransportError::Connect {
            member: member.to_string(),
            cause,
        };
        let endpoint = Endpoint::from_shared(url).map_err(|e| connect_error(e.into()))?;
        let channel = endpoint.connect().await.map_err(|e| connect_error(e.into()))?;

        Ok(Box::new(GrpcConnection {
            member: member.clone(),
            client: Mutex::new(Some(StoreProtocolClient::new(channel))),
        }))
    }
}

struct GrpcConnection {
    member: Member,
    // None once closed. The tonic client is a cheap handle, so each call clones it out.
    client: Mutex<Option<StoreProtocolClient<Channel>>>,
}

impl GrpcConnection {
    fn client(&self) -> Option<StoreProtocolClient<Channel>> {
        self.client
            .lock()
            .expect("GrpcConnection.client() mutex guard poison")
            .clone()
    }
}

#[async_trait::async_trait]
impl Connection for GrpcConnection {
    fn member(&self) -> &Member {
        &self.member
    }

    async fn submit(&self, request: SubmitRequest) -> Result<SubmitResponse, TransportError> {
        let mut client = self.client().ok_or(TransportError::Disconnected)?;

        let rpc_reply = client.submit(ProtoSubmitRequest::from(request)).await?;

        SubmitResponse::try_from(rpc_reply.into_inner())
    }

    fn close(&self) {
        // Dropping the last handle tears down the channel.
        self.client
            .lock()
            .expect("GrpcConnection.close() mutex guard poison")
            .take();
    }
}

/// Decodes a leader election announcement as published on the cluster messaging bus. Returns
/// `None` when the election produced no leader.
pub(crate) fn decode_leader_elect_event(payload: &[u8]) -> Result<Option<(Member, Term)>, LeaderElectDecodeError> {
    let event = ProtoLeaderElectEvent::decode(payload)?;
    convert_leader_elect_event(event)
}

pub(crate) fn convert_leader_elect_event(
    event: ProtoLeaderElectEvent,
) -> Result<Option<(Member, Term)>, LeaderElectDecodeError> {
    match event.leader {
        Some(proto_member) => Ok(Some((Member::try_from(proto_member)?, Term::new(event.term)))),
        None => Ok(None),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LeaderElectDecodeError {
    #[error("Malformed leader elect event")]
    Decode(#[from] prost::DecodeError),

    #[error("Leader '{id}' has invalid endpoint '{endpoint}'")]
    InvalidEndpoint { id: String, endpoint: String },
}

// ------- Conversions --------

impl From<Argument> for ProtoArgument {
    fn from(argument: Argument) -> Self {
        let value = match argument {
            Argument::Text(text) => proto_argument::Value::Text(text),
            Argument::Integer(integer) => proto_argument::Value::Integer(integer),
            Argument::Blob(blob) => proto_argument::Value::Blob(blob.to_vec()),
        };

        ProtoArgument { value: Some(value) }
    }
}

impl From<SubmitRequest> for ProtoSubmitRequest {
    fn from(request: SubmitRequest) -> Self {
        ProtoSubmitRequest {
            id: request.id.into_inner(),
            operation: request.operation,
            arguments: request.arguments.into_iter().map(ProtoArgument::from).collect(),
        }
    }
}

impl TryFrom<ProtoSubmitResponse> for SubmitResponse {
    type Error = TransportError;

    fn try_from(rpc_reply: ProtoSubmitResponse) -> Result<Self, Self::Error> {
        match rpc_reply.result {
            Some(proto_submit_response::Result::Ok(result)) => Ok(SubmitResponse {
                id: RequestId::from(rpc_reply.id),
                result: Bytes::from(result),
            }),
            Some(proto_submit_response::Result::Error(message)) => Err(TransportError::Remote { message }),
            // Can't claim success without a result.
            None => Err(TransportError::Remote {
                message: format!("Response to request {} has no result", rpc_reply.id),
            }),
        }
    }
}

impl TryFrom<ProtoMember> for Member {
    type Error = LeaderElectDecodeError;

    fn try_from(proto_member: ProtoMember) -> Result<Self, Self::Error> {
        match proto_member.endpoint.parse::<SocketAddr>() {
            Ok(endpoint) => Ok(Member::new(proto_member.id, endpoint)),
            Err(_) => Err(LeaderElectDecodeError::InvalidEndpoint {
                id: proto_member.id,
                endpoint: proto_member.endpoint,
            }),
        }
    }
}

impl From<&Member> for ProtoMember {
    fn from(member: &Member) -> Self {
        ProtoMember {
            id: member.id.clone(),
            endpoint: member.endpoint.to_string(),
        }
    }
}
