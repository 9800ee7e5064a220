//! Load-or-create-or-repair bootstrap for the profile configuration.
//!
//! This is the one entry point an enclosing program calls at startup:
//!
//! ```text
//! load_or_create(path, console)
//!  ├─ file absent     → prompt for the first profile, save, report
//!  ├─ file present    → read + parse
//!  │    └─ malformed  → warn, continue with an empty configuration
//!  └─ invariant check → if incomplete: prompt for one profile, save, report
//! ```
//!
//! The invariants are those of [`ProfileConfig::is_complete`]: at least one
//! profile and a non-empty default name. Both mutating paths share the same
//! prompt routine ([`Console::collect_named_profile`]); the only behavioral
//! difference between them is the console wording, because
//! [`ProfileConfig::add_profile`] already promotes the new name to default
//! exactly when no default was set.
//!
//! # Malformed files
//!
//! A file that exists but does not parse as the schema is logged as a
//! warning and treated like an empty configuration, so the repair prompts
//! rebuild it and the following save replaces the broken content. OS-level
//! read failures (permissions and the like) propagate immediately instead.

use std::io::{BufRead, Write};
use std::path::Path;

use credkeep_core::ProfileConfig;
use tracing::{info, warn};

use crate::infrastructure::console::Console;
use crate::infrastructure::store::{self, StoreError};

/// Loads the configuration at `path`, interactively creating or repairing it
/// when needed, and returns the resulting in-memory configuration.
///
/// The returned configuration always satisfies
/// [`ProfileConfig::is_complete`], because any incomplete state triggers the
/// repair prompts before returning. It is not mutated again for the duration
/// of the program run; callers treat it as read-only.
///
/// # Side effects
///
/// May write prompts and status lines to the console, read answers from it,
/// and create or overwrite the file at `path`.
///
/// # Errors
///
/// - [`StoreError::Io`] if reading an existing file fails at the OS level, or
///   if a save on the create/repair path fails. There are no retries and no
///   rollback: a failed save after prompting loses the user's input.
/// - [`StoreError::Console`] if the injected console reader or writer fails.
pub fn load_or_create<R: BufRead, W: Write>(
    path: &Path,
    console: &mut Console<R, W>,
) -> Result<ProfileConfig, StoreError> {
    let mut config = match store::read_config(path) {
        Ok(Some(config)) => config,
        Ok(None) => {
            console.say(
                "Configuration file not found, please provide the details for the first CloudSecure:",
            )?;
            let mut config = ProfileConfig::default();
            let (name, profile) = console.collect_named_profile()?;
            config.add_profile(name, profile);

            store::save_config(path, &config)?;
            console.say(&format!("Configuration saved to {}", path.display()))?;
            config
        }
        Err(StoreError::Parse(e)) => {
            // Rebuilt below: an unparseable file never blocks startup, but
            // it must leave a trace in the log.
            warn!(
                path = %path.display(),
                error = %e,
                "configuration file is not valid JSON; rebuilding interactively"
            );
            ProfileConfig::default()
        }
        Err(e) => return Err(e),
    };

    if !config.is_complete() {
        console.say("Invalid configuration. Adding a new CloudSecure:")?;
        let (name, profile) = console.collect_named_profile()?;
        config.add_profile(name, profile);

        store::save_config(path, &config)?;
        console.say(&format!(
            "Updated and saved configuration to {}",
            path.display()
        ))?;
    }

    info!(
        profiles = config.profiles.len(),
        default = %config.default_profile,
        "configuration ready"
    );
    Ok(config)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// End-to-end properties of the bootstrap (fresh create, round-trip, repair,
// idempotent reload) live in `tests/bootstrap_integration.rs`. The cases here
// cover the branches that are easiest to pin down at the unit level.
