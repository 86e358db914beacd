mod console;
mod module_registry;
mod translation_client;

pub use console::Console;
pub use module_registry::ModuleRegistry;
pub use translation_client::TranslationClient;
