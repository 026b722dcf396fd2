use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

pub fn shutdown_signal() -> (ShutdownHandle, ShutdownSignal) {
    let (tx, rx) = oneshot::channel();

    (ShutdownHandle { tx: Some(tx) }, ShutdownSignal { rx })
}

/// Stops the server it was paired with, either through `shutdown()` or by being dropped.
pub struct ShutdownHandle {
    tx: Option<oneshot::Sender<()>>,
}

impl ShutdownHandle {
    pub fn shutdown(mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(());
        }
    }
}

pub struct ShutdownSignal {
    rx: oneshot::Receiver<()>,
}

impl Future for ShutdownSignal {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // Sent or dropped, either way the handle is gone.
        Pin::new(&mut self.rx).poll(cx).map(|_| ())
    }
}
