use std::path::PathBuf;

/// Host capability: which modules exist and where they live on disk.
///
/// Whether a negative answer is fatal or merely advisory is the call site's
/// choice; the registry itself only answers the question.
pub trait ModuleRegistry {
    /// Whether a module directory for `name` is present and `name` is not the
    /// reserved host-system module.
    fn exists(&self, name: &str) -> bool;

    /// Root path of the module. Only meaningful when `exists` returned true.
    fn resolve_path(&self, name: &str) -> PathBuf;
}
