//! txfetch: maintain per-module Transifex configuration and fetch translations
//! into loadable language files for a modular host application.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::commands::{configure, fetch};
use domain::TransifexApiConfig;
use services::{FilesystemModuleRegistry, HttpTransifexClient, TerminalConsole};

pub use domain::AppError;

/// Run the interactive configuration editor for the host application in the
/// current directory.
pub fn configure() -> Result<(), AppError> {
    let registry = FilesystemModuleRegistry::current()?;
    let console = TerminalConsole::new();

    configure::execute(&console, &registry)
}

/// Run the interactive fetch pipeline for the host application in the current
/// directory.
pub fn fetch() -> Result<(), AppError> {
    let registry = FilesystemModuleRegistry::current()?;
    let console = TerminalConsole::new();
    let api_config = TransifexApiConfig::default();

    fetch::execute(&console, &registry, |token, project| {
        HttpTransifexClient::new(token.to_string(), project.to_string(), &api_config)
    })
}
