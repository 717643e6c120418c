//! Search entry points over loaded records.
//!
//! # Responsibility
//! - Expose pure, deterministic filters used by dashboard-style views.

pub mod title;
