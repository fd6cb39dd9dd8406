use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use crate::domain::ports::{is_affirmative, Confirmer};

/// Prints the prompt to stderr and reads a single line.
///
/// End of input or a read error is a decline.
pub struct LineConfirmer<R: BufRead> {
    input: RefCell<R>,
}

impl LineConfirmer<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineConfirmer<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: RefCell::new(input),
        }
    }
}

impl<R: BufRead> Confirmer for LineConfirmer<R> {
    fn ask(&self, prompt: &str) -> bool {
        eprint!("{} ", prompt);
        let _ = io::stderr().flush();

        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&line),
        }
    }
}
