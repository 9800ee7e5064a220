//! Application layer use cases for the Credkeep CLI.
//!
//! A single use case lives here: [`bootstrap::load_or_create`], the
//! load-or-create-or-repair lifecycle that every enclosing program runs once
//! at startup before touching any cloud API.
//!
//! The use case orchestrates the domain types from `credkeep_core` and the
//! infrastructure adapters (file store, console). Terminal I/O is injected
//! through the generic [`Console`](crate::infrastructure::console::Console)
//! pair so tests drive the prompts with in-memory buffers.

pub mod bootstrap;
