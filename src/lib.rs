//! reposweep - garbage collector for multi-repository workspaces
//!
//! A workspace keeps per-project git directories and shared object storage
//! under its `.repo/` directory. Projects come and go; their `.git`
//! directories stay behind. reposweep reconciles what is on disk against the
//! project registry and removes what nothing uses any more.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GcOptions, GcOutcome, GcRequest, GcResult, GcUseCase};
pub use config::Config;
pub use domain::entities::{Registry, Workspace};
pub use domain::services::ReconcileScanner;
pub use domain::value_objects::{DeleteSet, KeepSet, ScanRoot};
pub use error::{SweepError, SweepResult};
