//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskify_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // A tiny probe validates core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("taskify_core ping={}", taskify_core::ping());
    println!("taskify_core version={}", taskify_core::core_version());
}
