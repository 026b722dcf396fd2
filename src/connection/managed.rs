use crate::transport::{Connection, Transport, TransportError};
use crate::types::{Member, SubmitRequest, SubmitResponse};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// ConnectionManager opens connections on behalf of the leader tracker. Nothing else opens or
/// closes connections.
pub(crate) struct ConnectionManager {
    logger: slog::Logger,
    transport: Arc<dyn Transport>,
}

impl ConnectionManager {
    pub(crate) fn new(logger: slog::Logger, transport: Arc<dyn Transport>) -> Self {
        ConnectionManager { logger, transport }
    }

    pub(crate) async fn open(&self, member: &Member) -> Result<Arc<ManagedConnection>, TransportError> {
        let inner = self.transport.open_connection(member).await?;
        let logger = self.logger.new(slog::o!("Member" => member.to_string()));
        slog::debug!(logger, "Opened connection");

        Ok(Arc::new(ManagedConnection::new(logger, inner)))
    }
}

/// ManagedConnection exclusively owns a transport connection. It is closed exactly once: either
/// explicitly, or when the last reference goes away.
pub(crate) struct ManagedConnection {
    logger: slog::Logger,
    inner: Box<dyn Connection>,
    closed: AtomicBool,
    // Cancelled on close, so requests still in flight on this connection can notice.
    retired: CancellationToken,
}

impl ManagedConnection {
    fn new(logger: slog::Logger, inner: Box<dyn Connection>) -> Self {
        ManagedConnection {
            logger,
            inner,
            closed: AtomicBool::new(false),
            retired: CancellationToken::new(),
        }
    }

    pub(crate) fn member(&self) -> &Member {
        self.inner.member()
    }

    pub(crate) async fn submit(&self, request: SubmitRequest) -> Result<SubmitResponse, TransportError> {
        if self.is_closed() {
            return Err(TransportError::Disconnected);
        }

        self.inner.submit(request).await
    }

    /// Safe to call any number of times, from any number of threads.
    pub(crate) fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        self.retired.cancel();
        self.inner.close();
        slog::debug!(self.logger, "Closed connection");
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Completes once this connection has been closed.
    pub(crate) async fn retired(&self) {
        self.retired.cancelled().await
    }
}

impl Drop for ManagedConnection {
    fn drop(&mut self) {
        self.close();
    }
}
