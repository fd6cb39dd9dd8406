//! GC Event Port
//!
//! Provides an observable interface for the gc run.
//! Console rendering, NDJSON streams and tests all subscribe through it.

use std::path::PathBuf;

/// Event emitted during a gc run, in the order they happen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GcEvent {
    /// Scanning is about to start
    ScanStarted { repodir: PathBuf },

    /// One scan root has been walked
    RootScanned {
        root: PathBuf,
        candidates: usize,
        deletable: usize,
        issues: Vec<String>,
    },

    /// Both roots are clean
    NothingToClean,

    /// The merged deletion plan, sorted
    PlanReady { paths: Vec<PathBuf> },

    /// The operator did not confirm
    Declined,

    /// A directory was removed
    DirDeleted { path: PathBuf },

    /// A directory could not be removed; the run continues
    DirFailed { path: PathBuf, error: String },

    /// Deletion loop finished
    Completed { deleted: usize, failed: usize },
}

/// Trait for receiving gc events
///
/// Implementations can be:
/// - ConsoleGcSink: human-readable terminal output
/// - JsonGcSink: NDJSON event stream
/// - NoopGcSink: silent operation
pub trait GcEventSink {
    fn on_event(&self, event: GcEvent);
}

/// No-op event sink for silent operation
pub struct NoopGcSink;

impl GcEventSink for NoopGcSink {
    fn on_event(&self, _event: GcEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Test event sink that records all events
    struct RecordingSink {
        events: RefCell<Vec<GcEvent>>,
    }

    impl GcEventSink for RecordingSink {
        fn on_event(&self, event: GcEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingSink {
            events: RefCell::new(Vec::new()),
        };

        sink.on_event(GcEvent::ScanStarted {
            repodir: PathBuf::from("/ws/.repo"),
        });
        sink.on_event(GcEvent::NothingToClean);

        assert_eq!(sink.events.borrow().len(), 2);
    }
}
