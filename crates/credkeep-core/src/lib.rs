//! # credkeep-core
//!
//! Shared domain crate for Credkeep containing the credential profile
//! entities and their on-disk JSON schema.
//!
//! This crate is used by the CLI (and any future embedding application).
//! It has zero dependencies on the filesystem, the terminal, or any OS API:
//! everything here is plain data plus the invariants that make a
//! configuration usable.
//!
//! # What does Credkeep store? (for beginners)
//!
//! A cloud-service CLI needs credentials before it can do anything. Credkeep
//! keeps those credentials as **profiles**: each profile is a named triple of
//! API key, API secret, and tenant ID for one cloud account. The full
//! configuration is a map of profile name → profile, plus the name of the
//! profile to use when the caller does not ask for one explicitly (the
//! "default profile").
//!
//! The configuration is only considered usable when it holds at least one
//! profile *and* names a default. The loader in `credkeep-cli` enforces this
//! on every startup and interactively repairs a configuration that fails the
//! check.

// Rust will look for the module in src/domain/mod.rs.
pub mod domain;

// Re-export the two schema types at the crate root so callers can write
// `credkeep_core::ProfileConfig` instead of the full module path.
pub use domain::profile::{CredentialProfile, ProfileConfig};
