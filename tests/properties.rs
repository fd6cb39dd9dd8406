//! Property tests for reposweep.
//!
//! Properties use randomized workspace layouts to protect the scanner's
//! guarantees: nothing kept is ever planned for deletion, nothing unkept is
//! missed, and keep sets never leak across scan roots.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/scanner.rs"]
mod scanner;

#[path = "properties/confirmer.rs"]
mod confirmer;
