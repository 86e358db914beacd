use std::io;

use thiserror::Error;

/// Library-wide error type for txfetch operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No persisted configuration file exists yet.
    #[error(
        "No configuration file exists. Please maintain the configuration using the config command."
    )]
    NoConfiguration,

    /// The stored API token is missing or empty.
    #[error(
        "General configuration not correct or missing. Transifex apitoken unknown. Please maintain the configuration using the config command."
    )]
    MissingToken,

    /// No module has been configured yet.
    #[error(
        "Module configuration missing. Please maintain the configuration using the config command."
    )]
    NoModuleConfig,

    /// The module directory is missing, or the name is reserved for the host system.
    #[error("Module '{0}' does not exist")]
    ModuleNotFound(String),

    /// The persisted configuration is malformed.
    #[error("Malformed configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration tree could not be serialized.
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The remote service could not be reached or answered with an error status.
    #[error("Transifex is unavailable: {0}")]
    RemoteUnavailable(String),

    /// The remote service answered with a body this tool cannot interpret.
    #[error("Unexpected response from Transifex: {0}")]
    RemoteFormat(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Terminal interaction failed (e.g. stdin is not a tty).
    #[error("Prompt failed: {0}")]
    Prompt(String),
}
