//! Service layer containing the filter/sort logic and side-effect helpers.
//!
//! ## Service map
//! - `filter.rs` — visibility evaluation + results label.
//! - `sort.rs` — total-order computation per sort key.
//! - `controller.rs` — catalog controller tying filters, sort, view, and
//!   the search debouncer together.
//! - `debounce.rs` — trailing-edge quiet-period debouncer.
//! - `analytics.rs` — placeholder analytics sink (JSONL stub).
//! - `settings.rs` — optional user config file.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod analytics;
pub mod controller;
pub mod debounce;
pub mod filter;
pub mod output;
pub mod settings;
pub mod sort;
