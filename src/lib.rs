//! # statuswire
//!
//! Asynchronous request/reply bridge for injected setting status.
//!
//! A long-lived background service answers "current status" queries: each
//! inbound request carries a one-shot reply channel, the service invokes
//! the integrator's [`StatusProvider`] exactly once, marshals the result
//! into a [`ReplyEnvelope`], and attempts exactly one delivery. A delivery
//! failure is logged and swallowed so the next request is unaffected;
//! every other failure propagates.
//!
//! ## Architecture
//!
//! - **Handshake** ([`RequestHandler`]): take the reply sink out of the
//!   request, compute the status, build the envelope, attempt one delivery
//! - **Dispatch** ([`service`](spawn_service)): one logical worker, strict
//!   FIFO, handling turns never overlap
//! - **Discovery** ([`registration`]): static metadata advertised once per
//!   logical setting
//!
//! ## Example
//!
//! ```ignore
//! use statuswire::{Status, StatusServiceBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (service, _task) =
//!         StatusServiceBuilder::new("AcmeAdsStatus", || Status::new("ON", true))
//!             .spawn()?;
//!
//!     let reply = service.query().await?;
//!     assert_eq!(reply.status, "ON");
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;
pub mod protocol;
pub mod registration;

mod handler;
mod provider;
mod service;
mod sink;
mod status;

pub use error::{DeliveryError, Result, StatuswireError};
pub use handler::RequestHandler;
pub use protocol::{ReplyEnvelope, StatusRequest};
pub use provider::StatusProvider;
pub use service::{
    spawn_service, ServiceConfig, ServiceHandle, StatusServiceBuilder, DEFAULT_QUEUE_CAPACITY,
};
pub use sink::{OneshotSink, ReplySink};
pub use status::Status;
