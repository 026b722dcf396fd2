use crate::transport::{Connection, Transport, TransportError};
use crate::types::{Member, SubmitRequest, SubmitResponse};
use bytes::Bytes;
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::time::Duration;

pub(crate) fn test_logger() -> slog::Logger {
    slog::Logger::root(slog::Discard, slog::o!())
}

pub(crate) fn member(id: &str) -> Member {
    let port = 7000 + id.bytes().map(u16::from).sum::<u16>();
    Member::new(id, SocketAddr::from(([127, 0, 0, 1], port)))
}

pub(crate) fn encode<M: prost::Message>(message: &M) -> Bytes {
    let mut buf = Vec::with_capacity(message.encoded_len());
    message.encode(&mut buf).unwrap();
    Bytes::from(buf)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum TransportEvent {
    Opened(String),
    Closed(String),
    Submitted { member: String, operation: String },
}

#[derive(Clone, Debug)]
pub(crate) enum Reply {
    Payload(Bytes),
    DelayedPayload(Duration, Bytes),
    Failure(String),
    Hang,
}

/// MockTransport is an in-memory cluster. Replies are configured per operation name, and every
/// open/close/submit is recorded in order.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    shared: Arc<MockShared>,
}

#[derive(Default)]
struct MockShared {
    events: Mutex<Vec<TransportEvent>>,
    requests: Mutex<Vec<SubmitRequest>>,
    replies: Mutex<HashMap<String, Reply>>,
    refused: Mutex<HashSet<String>>,
    open_delay: Mutex<Option<Duration>>,
}

impl MockShared {
    fn record(&self, event: TransportEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        MockTransport::default()
    }

    pub(crate) fn reply(&self, operation: &str, reply: Reply) {
        self.shared.replies.lock().unwrap().insert(operation.to_string(), reply);
    }

    pub(crate) fn reply_with<M: prost::Message>(&self, operation: &str, message: &M) {
        self.reply(operation, Reply::Payload(encode(message)));
    }

    pub(crate) fn refuse(&self, member_id: &str) {
        self.shared.refused.lock().unwrap().insert(member_id.to_string());
    }

    pub(crate) fn accept(&self, member_id: &str) {
        self.shared.refused.lock().unwrap().remove(member_id);
    }

    pub(crate) fn delay_open(&self, delay: Duration) {
        self.shared.open_delay.lock().unwrap().replace(delay);
    }

    pub(crate) fn events(&self) -> Vec<TransportEvent> {
        self.shared.events.lock().unwrap().clone()
    }

    pub(crate) fn requests(&self) -> Vec<SubmitRequest> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub(crate) fn opened(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                TransportEvent::Opened(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn closed(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                TransportEvent::Closed(id) => Some(id),
                _ => None,
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn open_connection(&self, member: &Member) -> Result<Box<dyn Connection>, TransportError> {
        let delay = *self.shared.open_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.shared.refused.lock().unwrap().contains(&member.id) {
            return Err(TransportError::Connect {
                member: member.to_string(),
                cause: "connection refused".into(),
            });
        }

        self.shared.record(TransportEvent::Opened(member.id.clone()));
        Ok(Box::new(MockConnection {
            member: member.clone(),
            shared: self.shared.clone(),
            closed: AtomicBool::new(false),
        }))
    }
}

struct MockConnection {
    member: Member,
    shared: Arc<MockShared>,
    closed: AtomicBool,
}

#[async_trait::async_trait]
impl Connection for MockConnection {
    fn member(&self) -> &Member {
        &self.member
    }

    async fn submit(&self, request: SubmitRequest) -> Result<SubmitResponse, TransportError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(TransportError::Disconnected);
        }

        self.shared.record(TransportEvent::Submitted {
            member: self.member.id.clone(),
            operation: request.operation.clone(),
        });
        self.shared.requests.lock().unwrap().push(request.clone());

        let reply = self
            .shared
            .replies
            .lock()
            .unwrap()
            .get(&request.operation)
            .cloned()
            .unwrap_or(Reply::Payload(Bytes::new()));

        let result = match reply {
            Reply::Payload(result) => result,
            Reply::DelayedPayload(delay, result) => {
                tokio::time::sleep(delay).await;
                result
            }
            Reply::Failure(message) => return Err(TransportError::Remote { message }),
            Reply::Hang => std::future::pending().await,
        };

        Ok(SubmitResponse { id: request.id, result })
    }

    fn close(&self) {
        // Record every call so tests can catch double closes.
        self.closed.store(true, Ordering::Release);
        self.shared.record(TransportEvent::Closed(self.member.id.clone()));
    }
}
