//! Integration tests for statuswire.
//!
//! These exercise the full handshake through the service loop, including
//! the wire form of the reply envelope as it would cross a process
//! boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use statuswire::protocol::schema;
use statuswire::{
    OneshotSink, ReplyEnvelope, Status, StatusProvider, StatusRequest, StatusServiceBuilder,
};

/// A provider reading shared state, the way a real integrator would wrap a
/// settings store.
struct ToggleProvider {
    enabled: Arc<AtomicBool>,
}

impl StatusProvider for ToggleProvider {
    fn status(&self) -> Status {
        if self.enabled.load(Ordering::SeqCst) {
            Status::new("ON", true)
        } else {
            Status::new("OFF", false)
        }
    }
}

#[tokio::test]
async fn test_full_handshake() {
    let enabled = Arc::new(AtomicBool::new(true));
    let (service, _task) = StatusServiceBuilder::new(
        "AcmeStatus",
        ToggleProvider {
            enabled: enabled.clone(),
        },
    )
    .spawn()
    .unwrap();

    let reply = service.query().await.unwrap();
    assert_eq!(reply, ReplyEnvelope {
        status: "ON".to_string(),
        enabled: true,
    });

    // Each request observes the state at its own handling turn.
    enabled.store(false, Ordering::SeqCst);
    let reply = service.query().await.unwrap();
    assert_eq!(reply.status, "OFF");
    assert!(!reply.enabled);
}

#[tokio::test]
async fn test_reply_envelope_survives_wire_round_trip() {
    let (service, _task) = StatusServiceBuilder::new("AcmeStatus", || {
        Status::new("2 of 3 accounts syncing", true)
    })
    .spawn()
    .unwrap();

    let reply = service.query().await.unwrap();

    // Marshal across a process boundary and back.
    let bytes = reply.encode().unwrap();
    let decoded = ReplyEnvelope::decode(&bytes).unwrap();
    assert_eq!(decoded, reply);

    // The wire form is a map keyed by the shared schema constants.
    let value: serde_json::Value = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(value[schema::STATUS_KEY], "2 of 3 accounts syncing");
    assert_eq!(value[schema::ENABLED_KEY], true);
}

#[tokio::test]
async fn test_failure_isolation_across_request_kinds() {
    let (service, _task) = StatusServiceBuilder::new("AcmeStatus", || Status::new("ON", true))
        .spawn()
        .unwrap();

    // A caller that disappeared before its reply.
    let (sink, rx) = OneshotSink::channel();
    drop(rx);
    service.submit(StatusRequest::new(sink)).await.unwrap();

    // A request that never carried a reply destination.
    service
        .submit(StatusRequest::without_reply())
        .await
        .unwrap();

    // Neither disturbs the next well-formed request.
    let reply = service.query().await.unwrap();
    assert_eq!(reply.status, "ON");
}
