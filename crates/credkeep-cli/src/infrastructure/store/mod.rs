//! JSON-based configuration persistence.
//!
//! Reads and writes [`ProfileConfig`] at a caller-supplied path, and resolves
//! the platform-appropriate default location when the caller has none:
//!
//! - Windows:  `%APPDATA%\Credkeep\config.json`
//! - Linux:    `$XDG_CONFIG_HOME/credkeep/config.json` (or `~/.config/...`)
//! - macOS:    `~/Library/Application Support/Credkeep/config.json`
//!
//! The on-disk format is pretty-printed JSON with 2-space indentation; see
//! [`credkeep_core::domain::profile`] for the exact schema. Writes truncate
//! in place: no atomic rename, no backup of the previous content. On Unix the
//! file is chmodded to `0644` after writing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use credkeep_core::ProfileConfig;
use thiserror::Error;
use tracing::debug;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file content could not be parsed as the configuration schema.
    #[error("failed to parse config JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The configuration could not be serialized to JSON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reading from or writing to the interactive console failed.
    #[error("console I/O error: {0}")]
    Console(#[from] io::Error),
}

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`StoreError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, StoreError> {
    platform_config_dir().ok_or(StoreError::NoPlatformConfigDir)
}

/// Resolves the full default path to the config file.
///
/// # Errors
///
/// Returns [`StoreError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn default_config_path() -> Result<PathBuf, StoreError> {
    Ok(config_dir()?.join("config.json"))
}

/// Reads the configuration from `path`, returning `Ok(None)` if no file
/// exists there.
///
/// # Errors
///
/// Returns [`StoreError::Io`] for file-system errors other than "not found",
/// and [`StoreError::Parse`] if the content is not valid JSON for the schema.
/// The caller decides how to react to a parse failure; the bootstrap use case
/// treats it as an invalid configuration and rebuilds interactively.
pub fn read_config(path: &Path) -> Result<Option<ProfileConfig>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: ProfileConfig = serde_json::from_str(&content).map_err(StoreError::Parse)?;
    debug!(path = %path.display(), profiles = config.profiles.len(), "configuration loaded");
    Ok(Some(config))
}

/// Persists `config` to `path` as pretty-printed JSON, creating the file if
/// absent or truncating it if present.
///
/// The enclosing directory must already exist; this function does not create
/// it (the binary prepares the directory for the default path before the
/// first save).
///
/// # Errors
///
/// Returns [`StoreError::Serialize`] if encoding fails (not expected for this
/// data shape) or [`StoreError::Io`] if the write fails (missing directory,
/// permission denied, disk full).
pub fn save_config(path: &Path, config: &ProfileConfig) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(config).map_err(StoreError::Serialize)?;
    fs::write(path, content).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Owner read-write, group/other read.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).map_err(|source| {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
    }

    debug!(path = %path.display(), profiles = config.profiles.len(), "configuration saved");
    Ok(())
}

/// Resolves the platform config base directory including the `Credkeep`
/// subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Credkeep"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("credkeep"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/Credkeep
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Credkeep")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        // Fallback for unsupported platforms.
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use credkeep_core::CredentialProfile;
    use uuid::Uuid;

    fn temp_config_path() -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!("credkeep_test_{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        (dir, path)
    }

    fn sample_config() -> ProfileConfig {
        let mut cfg = ProfileConfig::default();
        cfg.add_profile(
            "prod",
            CredentialProfile {
                api_key: "k".to_string(),
                api_secret: "s".to_string(),
                tenant_id: "t".to_string(),
            },
        );
        cfg
    }

    // ── read_config ───────────────────────────────────────────────────────────

    #[test]
    fn test_read_config_returns_none_when_file_absent() {
        let path = PathBuf::from("/nonexistent/path/that/cannot/exist/config.json");
        let result = read_config(&path).expect("absent file is not an error");
        assert!(result.is_none());
    }

    #[test]
    fn test_read_config_surfaces_parse_error_for_malformed_json() {
        // Arrange
        let (dir, path) = temp_config_path();
        fs::write(&path, "{{{ not json").unwrap();

        // Act
        let result = read_config(&path);

        // Assert
        assert!(matches!(result, Err(StoreError::Parse(_))));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_config_parses_empty_object_to_zero_values() {
        let (dir, path) = temp_config_path();
        fs::write(&path, "{}").unwrap();

        let cfg = read_config(&path).expect("read").expect("file exists");
        assert!(cfg.profiles.is_empty());
        assert!(cfg.default_profile.is_empty());

        fs::remove_dir_all(&dir).ok();
    }

    // ── save_config ───────────────────────────────────────────────────────────

    #[test]
    fn test_save_and_read_config_round_trip() {
        // Arrange
        let (dir, path) = temp_config_path();
        let cfg = sample_config();

        // Act
        save_config(&path, &cfg).expect("save");
        let restored = read_config(&path).expect("read").expect("file exists");

        // Assert
        assert_eq!(restored, cfg);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_config_writes_two_space_indented_json() {
        let (dir, path) = temp_config_path();

        save_config(&path, &sample_config()).expect("save");
        let content = fs::read_to_string(&path).unwrap();

        // serde_json pretty-printing indents nested fields with two spaces.
        assert!(content.contains("  \"cloudsecures\""));
        assert!(content.contains("      \"apiKey\": \"k\""));
        assert!(content.contains("  \"default_cloud_name\": \"prod\""));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_config_overwrites_existing_file() {
        // Arrange: a previous run left different content behind.
        let (dir, path) = temp_config_path();
        fs::write(&path, "old content from a previous run").unwrap();

        // Act
        save_config(&path, &ProfileConfig::default()).expect("save");

        // Assert – no remnant of the old content survives.
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("old content"));
        let restored: ProfileConfig = serde_json::from_str(&content).unwrap();
        assert_eq!(restored, ProfileConfig::default());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_config_fails_with_io_error_when_directory_missing() {
        // save_config intentionally does not create directories.
        let path = std::env::temp_dir()
            .join(format!("credkeep_missing_{}", Uuid::new_v4()))
            .join("config.json");

        let result = save_config(&path, &ProfileConfig::default());

        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_config_sets_mode_0644() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, path) = temp_config_path();
        save_config(&path, &sample_config()).expect("save");

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);

        fs::remove_dir_all(&dir).ok();
    }

    // ── default path formation ────────────────────────────────────────────────

    #[test]
    fn test_default_config_path_ends_with_config_json() {
        if let Ok(path) = default_config_path() {
            assert!(
                path.ends_with("config.json"),
                "config file must be named config.json, got {path:?}"
            );
        }
        // NoPlatformConfigDir (e.g. in a stripped CI env) is also acceptable.
    }

    #[test]
    fn test_platform_config_dir_returns_some_on_this_platform() {
        let result = platform_config_dir();
        #[cfg(target_os = "windows")]
        if std::env::var_os("APPDATA").is_some() {
            assert!(result.is_some());
        }
        #[cfg(target_os = "linux")]
        {
            let has_xdg = std::env::var_os("XDG_CONFIG_HOME").is_some();
            let has_home = std::env::var_os("HOME").is_some();
            if has_xdg || has_home {
                assert!(result.is_some());
            }
        }
        #[cfg(target_os = "macos")]
        if std::env::var_os("HOME").is_some() {
            assert!(result.is_some());
        }
    }
}
