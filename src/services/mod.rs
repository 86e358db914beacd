mod console_terminal;
mod module_registry_filesystem;
mod transifex_client_http;

pub use console_terminal::TerminalConsole;
pub use module_registry_filesystem::FilesystemModuleRegistry;
pub use transifex_client_http::HttpTransifexClient;
