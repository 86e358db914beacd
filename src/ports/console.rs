use crate::domain::AppError;

/// Console I/O primitives used by the interactive commands.
///
/// The menu and confirmation loops are built on top of these in
/// `app::interact`; the trait itself stays minimal so scripted implementations
/// can drive the commands in tests.
pub trait Console {
    /// Print a plain line.
    fn line(&self, text: &str);

    /// Print an advisory note (skipped module, echoed configuration change, ...).
    fn comment(&self, text: &str);

    /// Print a success highlight.
    fn info(&self, text: &str);

    /// Ask a question and read one line of input. Empty input is allowed.
    fn prompt(&self, question: &str) -> Result<String, AppError>;

    /// Ask a question and read one line of input without echoing it.
    fn prompt_secret(&self, question: &str) -> Result<String, AppError>;
}
