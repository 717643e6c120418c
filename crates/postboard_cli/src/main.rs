//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `postboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("postboard_core ping={}", postboard_core::ping());
    println!("postboard_core version={}", postboard_core::core_version());
}
