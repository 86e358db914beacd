use crate::domain::{AppError, TranslationMap};

/// Remote access to one Transifex project's resources.
///
/// A client is bound to a single project and API token; the fetch command
/// creates a fresh client whenever a different module is selected.
pub trait TranslationClient {
    /// Locale codes a resource is translated into, in response order, with the
    /// resource's source locale excluded.
    fn fetch_locales(&self, resource: &str) -> Result<Vec<String>, AppError>;

    /// Translation map for one resource and locale.
    fn fetch_translations(&self, resource: &str, locale: &str)
    -> Result<TranslationMap, AppError>;
}
