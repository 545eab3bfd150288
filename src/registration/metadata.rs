//! Advertisement schema builder.

use std::collections::BTreeMap;

use serde_json::json;

use crate::error::{Result, StatuswireError};

/// Advertisement format version.
pub const ADVERTISEMENT_VERSION: &str = "1.0.0";

/// Static, declarative characteristics of one injected setting.
///
/// The dynamic side (summary text, enabled flag) comes from the provider at
/// request time; nothing here changes while the service runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingMetadata {
    /// Label shown for the entry in the aggregated settings list. Should
    /// make clear which apps are affected, typically by naming the
    /// developer.
    pub label: String,

    /// Icon reference for the entry.
    pub icon: String,

    /// Entry point of the separate flow that adjusts the setting.
    pub settings_entry: String,
}

/// The set of settings advertised to the discovery mechanism.
///
/// Keyed by logical setting; a key can be advertised only once. Iteration
/// order is stable so the rendered advertisement is deterministic.
#[derive(Debug, Clone, Default)]
pub struct RegistrationSchema {
    settings: BTreeMap<String, SettingMetadata>,
}

impl RegistrationSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advertise a setting.
    ///
    /// # Errors
    ///
    /// Rejects a second advertisement for the same setting key with
    /// [`StatuswireError::DuplicateSetting`].
    pub fn advertise(&mut self, key: &str, metadata: SettingMetadata) -> Result<()> {
        if self.settings.contains_key(key) {
            return Err(StatuswireError::DuplicateSetting(key.to_string()));
        }
        self.settings.insert(key.to_string(), metadata);
        Ok(())
    }

    /// Get an advertised setting by key.
    pub fn get(&self, key: &str) -> Option<&SettingMetadata> {
        self.settings.get(key)
    }

    /// Number of advertised settings.
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Whether nothing is advertised yet.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

/// Render the advertisement message for a schema.
///
/// One JSON line carrying the format version and every advertised setting,
/// ready to be written to stdout.
pub fn build_advertisement(schema: &RegistrationSchema) -> String {
    let settings: serde_json::Map<String, serde_json::Value> = schema
        .settings
        .iter()
        .map(|(key, m)| {
            (
                key.clone(),
                json!({
                    "label": m.label,
                    "icon": m.icon,
                    "settingsEntry": m.settings_entry,
                }),
            )
        })
        .collect();

    json!({
        "advertise": "injected-status-setting",
        "version": ADVERTISEMENT_VERSION,
        "settings": settings,
    })
    .to_string()
}
