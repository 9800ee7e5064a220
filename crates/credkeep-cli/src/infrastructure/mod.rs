//! Infrastructure layer for the Credkeep CLI.
//!
//! Contains the OS-facing adapters: JSON configuration file persistence and
//! console prompting.
//!
//! **Dependency rule**: this layer may depend on `credkeep_core`, but the
//! domain crate never imports from here.

pub mod console;
pub mod store;
