//! GC Use Case
//!
//! Orchestrates the garbage collection of unreferenced metadata directories.
//!
//! This module handles:
//! - Scanning the project and object roots against their own keep sets
//! - Merging both delete sets into one plan
//! - Asking for confirmation before anything is removed
//! - Deleting each directory, collecting failures instead of stopping

mod options;
mod result;
mod use_case;

pub use options::{GcOptions, GcRequest};
pub use result::{DeletionFailure, GcOutcome, GcResult};
pub use use_case::{GcUseCase, CONFIRM_PROMPT};
