//! Credential profile entities and the persisted JSON schema.
//!
//! The on-disk format is fixed for compatibility with existing configuration
//! files, so the JSON field names differ from the Rust field names:
//!
//! ```json
//! {
//!   "cloudsecures": {
//!     "prod": {
//!       "apiKey": "…",
//!       "apiSecret": "…",
//!       "tenantID": "…"
//!     }
//!   },
//!   "default_cloud_name": "prod"
//! }
//! ```
//!
//! # Serde defaults
//!
//! Every field carries `#[serde(default)]` so a partial document (or an empty
//! `{}`) deserializes to empty values instead of failing. A file written by
//! an older or interrupted run therefore still loads, and the invariant check
//! below decides whether the result is usable or needs interactive repair.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named set of credentials for one cloud account.
///
/// All fields are free-form strings. The prompting layer trims surrounding
/// whitespace before storage; beyond that, no format or emptiness validation
/// is applied — an empty API key is stored as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialProfile {
    /// API key issued by the cloud service.
    #[serde(rename = "apiKey", default)]
    pub api_key: String,
    /// API secret paired with the key.
    #[serde(rename = "apiSecret", default)]
    pub api_secret: String,
    /// Tenant (organization) identifier the credentials belong to.
    #[serde(rename = "tenantID", default)]
    pub tenant_id: String,
}

/// Top-level configuration persisted on disk.
///
/// Holds every known profile plus the name of the default one. Profile names
/// are unique map keys; a `BTreeMap` keeps serialization order deterministic
/// (the format itself does not care about order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// All profiles, indexed by name.
    #[serde(rename = "cloudsecures", default)]
    pub profiles: BTreeMap<String, CredentialProfile>,
    /// Name of the profile used when the caller does not specify one.
    /// Empty string means "no default set".
    #[serde(rename = "default_cloud_name", default)]
    pub default_profile: String,
}

impl ProfileConfig {
    /// Returns `true` when the configuration satisfies both load-time
    /// invariants: at least one profile exists and a default is named.
    ///
    /// A configuration failing this check triggers the interactive repair
    /// path in the loader.
    pub fn is_complete(&self) -> bool {
        !self.profiles.is_empty() && !self.default_profile.is_empty()
    }

    /// Inserts `profile` under `name`, replacing any existing entry with the
    /// same name, and promotes `name` to default only if no default is set.
    ///
    /// Both the first-run path and the repair path go through this method:
    /// on first run the default is necessarily empty, so the new profile
    /// becomes the default; during repair an existing default is preserved.
    pub fn add_profile(&mut self, name: impl Into<String>, profile: CredentialProfile) {
        let name = name.into();
        if self.default_profile.is_empty() {
            self.default_profile = name.clone();
        }
        self.profiles.insert(name, profile);
    }

    /// Looks up a profile by name.
    pub fn get(&self, name: &str) -> Option<&CredentialProfile> {
        self.profiles.get(name)
    }

    /// Returns the credentials of the default profile, if the default names
    /// an existing profile.
    pub fn default_credentials(&self) -> Option<&CredentialProfile> {
        self.profiles.get(&self.default_profile)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
