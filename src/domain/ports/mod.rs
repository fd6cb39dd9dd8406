//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmer;
pub mod gc_events;
pub mod registry_repository;
pub mod tree_remover;
pub mod wipe_events;

pub use confirmer::{is_affirmative, AssumeYes, Confirmer, DeclineAll};
pub use gc_events::{GcEvent, GcEventSink, NoopGcSink};
pub use registry_repository::{RegistryError, RegistryRepository};
pub use tree_remover::{RemoveError, RemoveResult, TreeRemover};
pub use wipe_events::{DirKind, NoopWipeSink, WipeEvent, WipeEventSink};
