pub mod config_store;
pub mod error;
pub mod host;
pub mod language_file;
pub mod selection;
pub mod translation;

mod api_config;

pub use api_config::TransifexApiConfig;
pub use config_store::ConfigStore;
pub use error::AppError;
pub use host::{
    CONFIG_FILE, DEFAULT_DOMAIN, LANGUAGES_DIR, PACKAGES_DIR, RESERVED_MODULE, SELF_MODULE,
};
pub use translation::TranslationMap;
