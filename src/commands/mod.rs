//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — browse/count/show/session/validate.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate filter/sort logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;

pub use runtime::handle_commands;
