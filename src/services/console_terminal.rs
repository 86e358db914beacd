use dialoguer::{Input, Password};

use crate::domain::AppError;
use crate::ports::Console;

/// Terminal console built on dialoguer.
///
/// Questions are printed on their own line, preceded by a blank line, so menus
/// stay readable; the dialoguer widgets only handle the raw input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn line(&self, text: &str) {
        println!("{text}");
    }

    fn comment(&self, text: &str) {
        println!("{text}");
    }

    fn info(&self, text: &str) {
        println!("✅ {text}");
    }

    fn prompt(&self, question: &str) -> Result<String, AppError> {
        println!();
        println!("{question}");
        Input::<String>::new()
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::Prompt(format!("reading input failed: {e}")))
    }

    fn prompt_secret(&self, question: &str) -> Result<String, AppError> {
        println!();
        println!("{question}");
        Password::new()
            .allow_empty_password(true)
            .interact()
            .map_err(|e| AppError::Prompt(format!("reading secret input failed: {e}")))
    }
}
