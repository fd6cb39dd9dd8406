//! Application Layer
//!
//! Use cases that orchestrate domain services and ports.
//!
//! - `gc` - Find and delete unreferenced `.git` directories
//! - `wipe` - Remove named projects and their git data

pub mod gc;
pub mod wipe;

pub use gc::{
    DeletionFailure, GcOptions, GcOutcome, GcRequest, GcResult, GcUseCase, CONFIRM_PROMPT,
};
pub use wipe::{WipeOptions, WipeResult, WipeUseCase};
