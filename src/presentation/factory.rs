//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{GcUseCase, WipeUseCase};
use crate::domain::entities::Workspace;
use crate::domain::ports::{AssumeYes, Confirmer, DeclineAll};
use crate::infrastructure::{
    LineConfirmer, LocalTreeRemover, TerminalConfirmer, TomlRegistryRepository,
};

/// Type alias for the concrete GcUseCase with all dependencies
pub type ConcreteGcUseCase = GcUseCase<Box<dyn Confirmer>, LocalTreeRemover>;

/// Type alias for the concrete WipeUseCase with all dependencies
pub type ConcreteWipeUseCase = WipeUseCase<TomlRegistryRepository, LocalTreeRemover>;

/// How the gc confirmation gets answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    /// `--yes`
    AssumeYes,
    /// Nobody can answer (JSON output)
    Decline,
    /// Prompt with dialoguer
    Terminal,
    /// Read one line from piped stdin
    Stdin,
}

impl ConfirmMode {
    pub fn select(yes: bool, json: bool, stdin_is_terminal: bool) -> Self {
        if yes {
            ConfirmMode::AssumeYes
        } else if json {
            ConfirmMode::Decline
        } else if stdin_is_terminal {
            ConfirmMode::Terminal
        } else {
            ConfirmMode::Stdin
        }
    }

    pub fn confirmer(self) -> Box<dyn Confirmer> {
        match self {
            ConfirmMode::AssumeYes => Box::new(AssumeYes),
            ConfirmMode::Decline => Box::new(DeclineAll),
            ConfirmMode::Terminal => Box::new(TerminalConfirmer::new()),
            ConfirmMode::Stdin => Box::new(LineConfirmer::stdin()),
        }
    }
}

/// Create a gc use case that deletes from local disk
pub fn create_gc_use_case(mode: ConfirmMode) -> ConcreteGcUseCase {
    GcUseCase::new(mode.confirmer(), LocalTreeRemover::new())
}

/// Create a wipe use case bound to the workspace registry
pub fn create_wipe_use_case(workspace: &Workspace) -> ConcreteWipeUseCase {
    WipeUseCase::new(
        TomlRegistryRepository::with_path(workspace.registry_path()),
        LocalTreeRemover::new(),
    )
}
