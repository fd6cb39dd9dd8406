//! Wipe Use Case
//!
//! Removes named projects completely:
//! - the worktree and the per-project git directory
//! - the object directory, unless another project still uses it
//! - the registry entries

mod options;
mod result;
mod use_case;

pub use options::WipeOptions;
pub use result::WipeResult;
pub use use_case::WipeUseCase;
