//! Credkeep CLI — entry point.
//!
//! Runs the configuration bootstrap once, exactly the way an enclosing cloud
//! CLI would at startup: load the profile configuration from disk, prompt
//! interactively if it is absent or invalid, persist any changes, then print
//! a short summary of the profiles that are now available.
//!
//! # Usage
//!
//! ```text
//! credkeep [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Configuration file path
//!                     [default: platform config dir, e.g.
//!                      ~/.config/credkeep/config.json on Linux]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable          | Description                                   |
//! |-------------------|-----------------------------------------------|
//! | `CREDKEEP_CONFIG` | Configuration file path (CLI arg wins if set) |
//! | `RUST_LOG`        | `tracing` filter, e.g. `credkeep=debug`       |

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use credkeep_cli::application::bootstrap::load_or_create;
use credkeep_cli::infrastructure::console::Console;
use credkeep_cli::infrastructure::store;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Credkeep — cloud credential profile bootstrap.
///
/// Loads the profile configuration, interactively creating or repairing it
/// when needed, and lists the resulting profiles.
#[derive(Debug, Parser)]
#[command(
    name = "credkeep",
    about = "Bootstrap and inspect cloud credential profiles",
    version
)]
struct Cli {
    /// Path to the configuration file.
    ///
    /// Defaults to `config.json` inside the platform config directory
    /// (`$XDG_CONFIG_HOME/credkeep` on Linux, `%APPDATA%\Credkeep` on
    /// Windows, `~/Library/Application Support/Credkeep` on macOS).
    #[arg(long, env = "CREDKEEP_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // An explicit path is used as-is; the platform default gets its
    // directory created up front because save_config does not create it.
    let path = match cli.config {
        Some(path) => path,
        None => {
            let path = store::default_config_path()?;
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating config directory {}", dir.display()))?;
            }
            path
        }
    };

    info!(path = %path.display(), "starting configuration bootstrap");

    let config = {
        let mut console = Console::stdio();
        load_or_create(&path, &mut console)
            .with_context(|| format!("bootstrapping configuration at {}", path.display()))?
    };

    println!("Profiles in {}:", path.display());
    for name in config.profiles.keys() {
        let marker = if *name == config.default_profile {
            " (default)"
        } else {
            ""
        };
        println!("  {name}{marker}");
    }

    Ok(())
}
