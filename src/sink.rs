//! One-shot reply channel abstraction.

use tokio::sync::oneshot;

use crate::error::DeliveryError;
use crate::protocol::ReplyEnvelope;

/// Write-once endpoint for delivering exactly one reply envelope.
///
/// `send` consumes the sink, so a second delivery attempt for the same
/// request cannot compile. Implementations pick the actual transport
/// (in-process channel, socket, RPC stub); the handshake logic stays
/// transport-agnostic and unit-testable with a fake sink.
pub trait ReplySink: Send {
    /// Deliver the envelope.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] when the endpoint is no longer
    /// reachable. The handler treats that as recoverable: it logs and
    /// moves on, it never retries.
    fn send(self: Box<Self>, envelope: ReplyEnvelope) -> Result<(), DeliveryError>;
}

/// In-process reply sink backed by a `tokio` oneshot channel.
///
/// The standard transport for callers living in the same process as the
/// service: the caller keeps the receiver and awaits the envelope.
pub struct OneshotSink {
    tx: oneshot::Sender<ReplyEnvelope>,
}

impl OneshotSink {
    /// Create a sink paired with the receiver that yields the reply.
    pub fn channel() -> (Self, oneshot::Receiver<ReplyEnvelope>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }
}

impl ReplySink for OneshotSink {
    fn send(self: Box<Self>, envelope: ReplyEnvelope) -> Result<(), DeliveryError> {
        self.tx
            .send(envelope)
            .map_err(|_| DeliveryError::Disconnected)
    }
}
