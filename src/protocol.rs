//! Protocol surface: envelope schema, inbound request, reply envelope.
//!
//! Nothing here persists beyond a single request/reply cycle. A request is
//! created by the transport layer, handed to the handler, and discarded
//! once the reply attempt completes; the envelope is built once per request
//! and transferred by value through the reply channel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::MsgPackCodec;
use crate::error::Result;
use crate::sink::ReplySink;
use crate::status::Status;

pub mod schema {
    //! Shared schema definition for the request and reply envelopes.
    //!
    //! Referenced by both the building and parsing sides so neither
    //! duplicates the keys as literals.

    /// Reply-envelope key carrying the status summary text.
    pub const STATUS_KEY: &str = "status";

    /// Reply-envelope key carrying the enabled flag.
    pub const ENABLED_KEY: &str = "enabled";

    /// Inbound-request key carrying the reply channel reference.
    pub const MESSENGER_KEY: &str = "messenger";

    /// Diagnostic channel tags must stay under this many characters.
    pub const MAX_LOG_TAG_LEN: usize = 23;
}

/// Inbound request for the current status.
///
/// The only attribute the handshake cares about is the reply destination,
/// kept under the [`schema::MESSENGER_KEY`] role. The handler reads it out
/// exactly once; everything else about the request is opaque.
pub struct StatusRequest {
    messenger: Option<Box<dyn ReplySink>>,
}

impl StatusRequest {
    /// Request carrying a reply sink.
    pub fn new(messenger: impl ReplySink + 'static) -> Self {
        Self {
            messenger: Some(Box::new(messenger)),
        }
    }

    /// Request with no reply destination. Sending one is a caller error,
    /// but transports can produce it, so the type models it.
    pub fn without_reply() -> Self {
        Self { messenger: None }
    }

    /// Take the reply sink out of the request.
    ///
    /// Yields `None` on a second call, or when the caller never attached a
    /// sink in the first place.
    pub fn take_messenger(&mut self) -> Option<Box<dyn ReplySink>> {
        self.messenger.take()
    }

    /// Whether a reply destination is still attached.
    pub fn has_messenger(&self) -> bool {
        self.messenger.is_some()
    }
}

impl fmt::Debug for StatusRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusRequest")
            .field(schema::MESSENGER_KEY, &self.messenger.is_some())
            .finish()
    }
}

/// Keyed payload delivered back through the reply channel.
///
/// The field names are the wire keys ([`schema::STATUS_KEY`] and
/// [`schema::ENABLED_KEY`]); the codec encodes the struct as a map, so the
/// wire form carries them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyEnvelope {
    /// The status summary text.
    pub status: String,

    /// Whether the setting is enabled.
    pub enabled: bool,
}

impl ReplyEnvelope {
    /// Build the envelope from a computed status.
    pub fn from_status(status: &Status) -> Self {
        Self {
            status: status.summary().to_string(),
            enabled: status.enabled(),
        }
    }

    /// Encode as a string-keyed MsgPack map.
    pub fn encode(&self) -> Result<Vec<u8>> {
        MsgPackCodec::encode(self)
    }

    /// Decode from the wire form.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        MsgPackCodec::decode(bytes)
    }
}
