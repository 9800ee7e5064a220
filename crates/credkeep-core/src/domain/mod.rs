//! Domain entities for Credkeep.
//!
//! Pure business data with no infrastructure dependencies: the types here can
//! be compiled and tested on any platform without a terminal or a writable
//! filesystem. The CLI's infrastructure layer (file store, console prompts)
//! depends on this module; this module never depends on it.

/// Credential profiles and the persisted configuration.
///
/// See [`profile::ProfileConfig`] for the main type.
pub mod profile;
