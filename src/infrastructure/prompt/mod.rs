//! Confirmer implementations
//!
//! - `TerminalConfirmer` - dialoguer text prompt on an interactive terminal
//! - `LineConfirmer` - reads one line from any reader (piped stdin, tests)

mod line;
mod terminal;

pub use line::LineConfirmer;
pub use terminal::TerminalConfirmer;
