//! Registration contract: declarative discovery metadata.
//!
//! Integrators advertise each injected setting to the discovery mechanism
//! with static metadata: a human-readable label, an icon reference, and the
//! entry point of the flow that adjusts the setting. At most one entry is
//! advertised per distinct logical setting, so the aggregated host list
//! never shows duplicates.
//!
//! The advertisement is rendered as a single JSON line and announced on
//! stdout; diagnostics belong on stderr and never interleave with it.
//!
//! # Example
//!
//! ```
//! use statuswire::registration::{build_advertisement, RegistrationSchema, SettingMetadata};
//!
//! let mut schema = RegistrationSchema::new();
//! schema
//!     .advertise(
//!         "ads-personalization",
//!         SettingMetadata {
//!             label: "Acme Corp. ads preferences".to_string(),
//!             icon: "acme/ic_ads".to_string(),
//!             settings_entry: "acme.settings.AdsActivity".to_string(),
//!         },
//!     )
//!     .unwrap();
//!
//! let line = build_advertisement(&schema);
//! assert!(line.contains("ads-personalization"));
//! ```

mod announce;
mod metadata;

pub use announce::{announce, write_stdout_line};
pub use metadata::{build_advertisement, RegistrationSchema, SettingMetadata, ADVERTISEMENT_VERSION};
