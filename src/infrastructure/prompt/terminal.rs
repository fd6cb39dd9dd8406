use dialoguer::Input;

use crate::domain::ports::{is_affirmative, Confirmer};

/// Asks on the terminal with a free-text answer.
///
/// `dialoguer::Confirm` re-prompts on anything but y/n; a text input lets any
/// other answer count as a decline.
#[derive(Debug, Default)]
pub struct TerminalConfirmer;

impl TerminalConfirmer {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmer for TerminalConfirmer {
    fn ask(&self, prompt: &str) -> bool {
        let answer: Result<String, _> = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();
        match answer {
            Ok(answer) => is_affirmative(&answer),
            Err(_) => false,
        }
    }
}
