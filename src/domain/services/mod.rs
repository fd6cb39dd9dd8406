//! Domain Services
//!
//! Business logic services that operate on domain values.

mod reconcile_scanner;

pub use reconcile_scanner::{is_repo_dir_name, ReconcileScanner, ScanReport};
