//! Interactive building blocks shared by the configure and fetch commands.

use crate::domain::AppError;
use crate::domain::selection::{parse_confirmation, parse_selection};
use crate::ports::Console;

/// Run a numbered menu until the user picks a valid entry.
///
/// Options are rendered as `1..=N` plus a `0 - Back / finish` entry; any input
/// that is not an integer in range leads to a fresh render of the menu.
/// Returns the 1-based choice, or 0 for back/finish.
pub fn choose<C: Console>(
    console: &C,
    question: &str,
    options: &[String],
) -> Result<usize, AppError> {
    loop {
        console.line("");
        console.line(question);
        console.line("0 - Back / finish");
        for (index, option) in options.iter().enumerate() {
            console.line(&format!("{} - {}", index + 1, option));
        }

        let input = console.prompt("Please enter the number of your selection:")?;
        if let Some(selection) = parse_selection(&input, options.len()) {
            return Ok(selection);
        }
    }
}

/// Ask a yes/no question until the answer is a clear `y` or `n`.
pub fn confirm<C: Console>(console: &C, question: &str) -> Result<bool, AppError> {
    loop {
        let answer = console.prompt(&format!("{question} (y/n)"))?;
        if let Some(confirmed) = parse_confirmation(&answer) {
            return Ok(confirmed);
        }
    }
}
