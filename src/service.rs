//! Sequential dispatch loop and caller-side handle.
//!
//! One logical worker per service instance: requests come off an mpsc inbox
//! and are handled strictly in arrival order. The reply attempt for request
//! N completes before request N+1 is received, so handling turns never
//! overlap and no application-managed locking is needed.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{Result, StatuswireError};
use crate::handler::RequestHandler;
use crate::protocol::{ReplyEnvelope, StatusRequest};
use crate::provider::StatusProvider;
use crate::sink::OneshotSink;

/// Default inbox capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 32;

/// Configuration for the service loop.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Inbox capacity; submitters wait when it is full.
    pub queue_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// Builder for configuring and spawning a status service.
///
/// # Example
///
/// ```ignore
/// use statuswire::{Status, StatusServiceBuilder};
///
/// let (service, _task) =
///     StatusServiceBuilder::new("AcmeAdsStatus", || Status::new("ON", true))
///         .queue_capacity(8)
///         .spawn()?;
///
/// let reply = service.query().await?;
/// ```
pub struct StatusServiceBuilder<P> {
    log_tag: String,
    provider: P,
    config: ServiceConfig,
}

impl<P> StatusServiceBuilder<P>
where
    P: StatusProvider + 'static,
{
    /// Start configuring a service around the given provider.
    pub fn new(log_tag: impl Into<String>, provider: P) -> Self {
        Self {
            log_tag: log_tag.into(),
            provider,
            config: ServiceConfig::default(),
        }
    }

    /// Override the inbox capacity.
    ///
    /// Default: [`DEFAULT_QUEUE_CAPACITY`]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.config.queue_capacity = capacity;
        self
    }

    /// Validate the handler and spawn the dispatch loop.
    ///
    /// # Errors
    ///
    /// Fails if the log tag does not satisfy the handler's length check.
    pub fn spawn(self) -> Result<(ServiceHandle, JoinHandle<()>)> {
        let handler = RequestHandler::new(self.log_tag, self.provider)?;
        Ok(spawn_service(handler, self.config))
    }
}

/// Spawn the dispatch loop for an already-built handler.
///
/// Returns the handle for submitting requests and the task driving the
/// loop. The loop ends when every handle is dropped; it dies early only if
/// a provider panics, which the [`JoinHandle`] reports.
pub fn spawn_service<P>(
    handler: RequestHandler<P>,
    config: ServiceConfig,
) -> (ServiceHandle, JoinHandle<()>)
where
    P: StatusProvider + 'static,
{
    let (tx, rx) = mpsc::channel(config.queue_capacity);
    let task = tokio::spawn(service_loop(rx, handler));
    (ServiceHandle { tx }, task)
}

/// Handle for submitting requests to a running service.
///
/// Cheaply cloneable; all clones feed the same sequential loop.
#[derive(Clone, Debug)]
pub struct ServiceHandle {
    tx: mpsc::Sender<StatusRequest>,
}

impl ServiceHandle {
    /// Submit a raw request.
    ///
    /// Returning `Ok` means the request was queued, not that it was
    /// handled yet.
    ///
    /// # Errors
    ///
    /// Fails with [`StatuswireError::ServiceClosed`] when the loop is gone.
    pub async fn submit(&self, request: StatusRequest) -> Result<()> {
        self.tx
            .send(request)
            .await
            .map_err(|_| StatuswireError::ServiceClosed)
    }

    /// Query the current status.
    ///
    /// Submits a request carrying a fresh one-shot reply channel and awaits
    /// the envelope. A reply that never arrives, because delivery failed on
    /// the service side or the service shut down, surfaces as
    /// [`StatuswireError::ServiceClosed`] rather than hanging forever.
    pub async fn query(&self) -> Result<ReplyEnvelope> {
        let (sink, reply) = OneshotSink::channel();
        self.submit(StatusRequest::new(sink)).await?;
        reply.await.map_err(|_| StatuswireError::ServiceClosed)
    }
}

/// Main dispatch loop: one handling turn at a time, strict FIFO.
async fn service_loop<P>(mut rx: mpsc::Receiver<StatusRequest>, handler: RequestHandler<P>)
where
    P: StatusProvider,
{
    while let Some(request) = rx.recv().await {
        if let Err(e) = handler.handle(request) {
            // Per-request failure path: the request is dropped, the loop
            // stays up for the next one.
            tracing::warn!(tag = %handler.log_tag(), error = %e, "request not handled");
        }
    }
}
