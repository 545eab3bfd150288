//! Request handler for the request/reply handshake.
//!
//! One handling turn: take the reply sink out of the request, invoke the
//! provider exactly once, marshal the result into a reply envelope, attempt
//! exactly one delivery. Delivery failure is logged and swallowed; every
//! other failure surfaces to the dispatch layer.

use crate::error::{Result, StatuswireError};
use crate::protocol::{schema, ReplyEnvelope, StatusRequest};
use crate::provider::StatusProvider;

/// Drives the request/reply handshake for one provider.
///
/// Handling turns never overlap: the dispatch layer guarantees mutual
/// exclusion between requests, the handler assumes it and does not enforce
/// it. No instance state is mutated across requests.
pub struct RequestHandler<P> {
    log_tag: String,
    provider: P,
}

impl<P> std::fmt::Debug for RequestHandler<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHandler")
            .field("log_tag", &self.log_tag)
            .finish_non_exhaustive()
    }
}

impl<P: StatusProvider> RequestHandler<P> {
    /// Create a handler that logs under `log_tag`.
    ///
    /// # Errors
    ///
    /// Fails fast with [`StatuswireError::LogTagTooLong`] if the tag is not
    /// under [`schema::MAX_LOG_TAG_LEN`] characters.
    pub fn new(log_tag: impl Into<String>, provider: P) -> Result<Self> {
        let log_tag = log_tag.into();
        if log_tag.len() >= schema::MAX_LOG_TAG_LEN {
            return Err(StatuswireError::LogTagTooLong(log_tag));
        }
        Ok(Self { log_tag, provider })
    }

    /// The diagnostic tag this handler logs under.
    pub fn log_tag(&self) -> &str {
        &self.log_tag
    }

    /// Handle one request to completion.
    ///
    /// The provider is invoked exactly once and the delivery is attempted
    /// exactly once; there are no retries and no second envelope. A
    /// delivery failure ends the turn normally so the next request is
    /// unaffected. A request without a reply destination surfaces as
    /// [`StatuswireError::MissingReplyChannel`] before the provider runs.
    pub fn handle(&self, mut request: StatusRequest) -> Result<()> {
        // Take the messenger before computing the status, so nothing the
        // provider does can invalidate or consume the request first.
        let messenger = request
            .take_messenger()
            .ok_or(StatuswireError::MissingReplyChannel)?;

        let status = self.provider.status();
        let envelope = ReplyEnvelope::from_status(&status);

        tracing::debug!(
            tag = %self.log_tag,
            request = ?request,
            status = ?status,
            envelope = ?envelope,
            "delivering status reply"
        );

        if let Err(e) = messenger.send(envelope) {
            tracing::error!(tag = %self.log_tag, error = %e, "reply delivery failed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::DeliveryError;
    use crate::sink::ReplySink;
    use crate::status::Status;

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
    }

    impl StatusProvider for CountingProvider {
        fn status(&self) -> Status {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Status::new(format!("call {n}"), true)
        }
    }

    struct RecordingSink {
        delivered: Arc<Mutex<Vec<ReplyEnvelope>>>,
    }

    impl ReplySink for RecordingSink {
        fn send(self: Box<Self>, envelope: ReplyEnvelope) -> std::result::Result<(), DeliveryError> {
            self.delivered.lock().unwrap().push(envelope);
            Ok(())
        }
    }

    struct FailingSink;

    impl ReplySink for FailingSink {
        fn send(self: Box<Self>, _envelope: ReplyEnvelope) -> std::result::Result<(), DeliveryError> {
            Err(DeliveryError::Rejected("endpoint gone".to_string()))
        }
    }

    fn recording_handler() -> (RequestHandler<impl StatusProvider>, Arc<Mutex<Vec<ReplyEnvelope>>>)
    {
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let handler = RequestHandler::new("TestStatus", || Status::new("ON", true)).unwrap();
        (handler, delivered)
    }

    #[test]
    fn test_log_tag_length_enforced() {
        let ok = RequestHandler::new("a".repeat(22), || Status::new("ON", true));
        assert!(ok.is_ok());

        let too_long = RequestHandler::new("a".repeat(23), || Status::new("ON", true));
        assert!(matches!(
            too_long.unwrap_err(),
            StatuswireError::LogTagTooLong(_)
        ));
    }

    #[test]
    fn test_delivers_envelope_exactly_once() {
        let (handler, delivered) = recording_handler();
        let sink = RecordingSink {
            delivered: delivered.clone(),
        };

        handler.handle(StatusRequest::new(sink)).unwrap();

        let replies = delivered.lock().unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].status, "ON");
        assert!(replies[0].enabled);
    }

    #[test]
    fn test_delivery_failure_is_swallowed() {
        let (handler, delivered) = recording_handler();

        // A failing delivery ends the turn normally.
        handler.handle(StatusRequest::new(FailingSink)).unwrap();

        // The next request is unaffected.
        let sink = RecordingSink {
            delivered: delivered.clone(),
        };
        handler.handle(StatusRequest::new(sink)).unwrap();
        assert_eq!(delivered.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_reply_channel_skips_provider() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = RequestHandler::new(
            "TestStatus",
            CountingProvider {
                calls: calls.clone(),
            },
        )
        .unwrap();

        let err = handler.handle(StatusRequest::without_reply()).unwrap_err();
        assert!(matches!(err, StatuswireError::MissingReplyChannel));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // The handler stays usable for the next, well-formed request.
        let delivered = Arc::new(Mutex::new(Vec::new()));
        handler
            .handle(StatusRequest::new(RecordingSink {
                delivered: delivered.clone(),
            }))
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(delivered.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_provider_invoked_once_per_request_in_order() {
        let calls = Arc::new(AtomicUsize::new(0));
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let handler = RequestHandler::new(
            "TestStatus",
            CountingProvider {
                calls: calls.clone(),
            },
        )
        .unwrap();

        for _ in 0..2 {
            handler
                .handle(StatusRequest::new(RecordingSink {
                    delivered: delivered.clone(),
                }))
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let replies = delivered.lock().unwrap();
        assert_eq!(replies[0].status, "call 1");
        assert_eq!(replies[1].status, "call 2");
    }

    #[test]
    fn test_provider_panic_propagates() {
        let handler = RequestHandler::new("TestStatus", || -> Status {
            panic!("provider broke");
        })
        .unwrap();

        // Unlike a delivery failure, a provider failure is not swallowed.
        let result = catch_unwind(AssertUnwindSafe(|| {
            handler.handle(StatusRequest::new(FailingSink))
        }));
        assert!(result.is_err());
    }
}
