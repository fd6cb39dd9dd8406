//! GC result types

use std::path::PathBuf;

/// How a gc run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcOutcome {
    /// Both roots were clean; nothing was shown or asked
    NothingToClean,
    /// Plan listed, run stopped before confirmation
    DryRun,
    /// Operator declined; nothing was deleted
    Declined,
    /// Operator confirmed; every path in the plan was attempted
    Completed,
}

impl GcOutcome {
    /// Only a declined confirmation is a failure. Partial deletion failures are
    /// reported but still exit successfully.
    pub fn is_success(&self) -> bool {
        !matches!(self, GcOutcome::Declined)
    }

    /// Snake-case name used in NDJSON output
    pub fn label(&self) -> &'static str {
        match self {
            GcOutcome::NothingToClean => "nothing_to_clean",
            GcOutcome::DryRun => "dry_run",
            GcOutcome::Declined => "declined",
            GcOutcome::Completed => "completed",
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// A directory that could not be removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of a gc run
#[derive(Debug, Clone)]
pub struct GcResult {
    pub outcome: GcOutcome,
    /// Merged, sorted deletion plan
    pub plan: Vec<PathBuf>,
    /// Directories that were removed
    pub deleted: Vec<PathBuf>,
    /// Directories that could not be removed
    pub failed: Vec<DeletionFailure>,
}

impl GcResult {
    pub fn new(outcome: GcOutcome, plan: Vec<PathBuf>) -> Self {
        Self {
            outcome,
            plan,
            deleted: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn add_deleted(&mut self, path: PathBuf) {
        self.deleted.push(path);
    }

    pub fn add_failed(&mut self, path: PathBuf, error: String) {
        self.failed.push(DeletionFailure { path, error });
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
