//! GC Use Case
//!
//! Scanning -> (Empty -> Done)
//! Scanning -> Reporting -> AwaitingConfirmation -> (Declined | Confirmed -> Deleting -> Done)

use crate::domain::ports::{Confirmer, GcEvent, GcEventSink, RemoveError, TreeRemover};
use crate::domain::services::ReconcileScanner;
use crate::domain::value_objects::{DeleteSet, KeepSet, ScanRoot};

use super::options::{GcOptions, GcRequest};
use super::result::{GcOutcome, GcResult};

/// Question put to the confirmer before deleting
pub const CONFIRM_PROMPT: &str = "Proceed? [y/N]";

/// GC use case - removes `.git` directories no registered project uses
pub struct GcUseCase<C, R>
where
    C: Confirmer,
    R: TreeRemover,
{
    scanner: ReconcileScanner,
    confirmer: C,
    remover: R,
}

impl<C, R> GcUseCase<C, R>
where
    C: Confirmer,
    R: TreeRemover,
{
    pub fn new(confirmer: C, remover: R) -> Self {
        Self {
            scanner: ReconcileScanner::new(),
            confirmer,
            remover,
        }
    }

    /// Scan both roots and merge the results. Nothing is deleted.
    pub fn plan(&self, request: &GcRequest, events: &dyn GcEventSink) -> DeleteSet {
        let mut plan = self.scan_root(&request.project_keep, &request.project_root, events);
        plan.merge(self.scan_root(&request.object_keep, &request.object_root, events));
        plan
    }

    /// Run the whole pass: scan, report, confirm, delete.
    pub fn run(
        &self,
        request: &GcRequest,
        options: &GcOptions,
        events: &dyn GcEventSink,
    ) -> GcResult {
        events.on_event(GcEvent::ScanStarted {
            repodir: request.repodir.clone(),
        });

        let plan = self.plan(request, events).into_vec();

        if plan.is_empty() {
            events.on_event(GcEvent::NothingToClean);
            return GcResult::new(GcOutcome::NothingToClean, plan);
        }

        events.on_event(GcEvent::PlanReady {
            paths: plan.clone(),
        });

        if options.dry_run {
            return GcResult::new(GcOutcome::DryRun, plan);
        }

        if !self.confirmer.ask(CONFIRM_PROMPT) {
            events.on_event(GcEvent::Declined);
            return GcResult::new(GcOutcome::Declined, plan);
        }

        let mut result = GcResult::new(GcOutcome::Completed, plan.clone());
        for path in plan {
            match self.remover.remove_tree(&path) {
                Ok(()) => {
                    events.on_event(GcEvent::DirDeleted { path: path.clone() });
                    result.add_deleted(path);
                }
                // Nested candidate already removed along with its parent
                Err(RemoveError::NotFound(_))
                    if result.deleted.iter().any(|parent| path.starts_with(parent)) =>
                {
                    events.on_event(GcEvent::DirDeleted { path: path.clone() });
                    result.add_deleted(path);
                }
                Err(e) => {
                    events.on_event(GcEvent::DirFailed {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                    result.add_failed(path, e.to_string());
                }
            }
        }

        events.on_event(GcEvent::Completed {
            deleted: result.deleted.len(),
            failed: result.failed.len(),
        });

        result
    }

    fn scan_root(&self, keep: &KeepSet, root: &ScanRoot, events: &dyn GcEventSink) -> DeleteSet {
        let report = self.scanner.scan(keep, root);
        events.on_event(GcEvent::RootScanned {
            root: root.as_path().to_path_buf(),
            candidates: report.candidate_count(),
            deletable: report.deletable.len(),
            issues: report.issues.clone(),
        });
        report.deletable
    }
}
