use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::fmt;
use std::net::SocketAddr;

/// Member is the identity of a node in the store cluster.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Member {
    pub id: String,
    pub endpoint: SocketAddr,
}

impl Member {
    pub fn new(id: impl Into<String>, endpoint: SocketAddr) -> Self {
        Member {
            id: id.into(),
            endpoint,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.endpoint)
    }
}

/// Term is the election epoch under which a leader was elected. Higher always wins.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Term(u64);

impl Term {
    pub fn new(term: u64) -> Self {
        Term(term)
    }

    /// The term before any election has been observed. No notification can carry it and win.
    pub fn zero() -> Self {
        Term(0)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// RequestId correlates a request with its response in logs. It carries no retry semantics.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct RequestId(String);

impl RequestId {
    pub(crate) fn random() -> Self {
        RequestId(format!("{:032x}", rand::random::<u128>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for RequestId {
    fn from(id: String) -> Self {
        RequestId(id)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A positional argument of a submitted operation. Forwarded to the store as-is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Argument {
    Text(String),
    Integer(i64),
    Blob(Bytes),
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Argument::Text(text.to_string())
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Argument::Text(text)
    }
}

impl From<i64> for Argument {
    fn from(integer: i64) -> Self {
        Argument::Integer(integer)
    }
}

impl From<Bytes> for Argument {
    fn from(blob: Bytes) -> Self {
        Argument::Blob(blob)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitRequest {
    pub id: RequestId,
    pub operation: String,
    pub arguments: Vec<Argument>,
}

impl SubmitRequest {
    pub(crate) fn new(operation: &str, arguments: Vec<Argument>) -> Self {
        SubmitRequest {
            id: RequestId::random(),
            operation: operation.to_string(),
            arguments,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitResponse {
    pub id: RequestId,
    /// Encoded result. Only the caller knows its type.
    pub result: Bytes,
}

/// LeaderInfo is a read-only view of the leader the gateway is currently connected to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaderInfo {
    pub member: Member,
    pub term: Term,
    pub elected_at: DateTime<Utc>,
}
