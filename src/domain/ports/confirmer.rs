//! Confirmer Port
//!
//! Yes/no prompt in front of every destructive action.
//! Implementations can be interactive (prompting the user) or fixed (applying a policy).

/// Trait for asking the operator to confirm a destructive action.
///
/// Implementations:
/// - `TerminalConfirmer` / `LineConfirmer`: read one answer from the operator
/// - `AssumeYes`: always confirms (`--yes`)
/// - `DeclineAll`: always declines (non-interactive callers)
pub trait Confirmer {
    /// Ask once. Returns true only for an affirmative answer.
    ///
    /// Must not loop on invalid input: anything that is not a yes is a no.
    fn ask(&self, prompt: &str) -> bool;
}

/// Interpret a raw answer: only `y` or `Y` (surrounding whitespace ignored) is a yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Confirmer that always says yes.
///
/// Use this when `--yes` is passed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn ask(&self, _prompt: &str) -> bool {
        true
    }
}

/// Confirmer that always says no.
///
/// Use this when nobody can answer a prompt (JSON output, scripts).
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclineAll;

impl Confirmer for DeclineAll {
    fn ask(&self, _prompt: &str) -> bool {
        false
    }
}

impl<C: Confirmer + ?Sized> Confirmer for &C {
    fn ask(&self, prompt: &str) -> bool {
        (**self).ask(prompt)
    }
}

impl<C: Confirmer + ?Sized> Confirmer for Box<C> {
    fn ask(&self, prompt: &str) -> bool {
        (**self).ask(prompt)
    }
}
