use std::path::PathBuf;

use crate::domain::{AppError, PACKAGES_DIR, RESERVED_MODULE};
use crate::ports::ModuleRegistry;

/// Filesystem-based module registry rooted at the host application directory.
#[derive(Debug, Clone)]
pub struct FilesystemModuleRegistry {
    root: PathBuf,
}

impl FilesystemModuleRegistry {
    /// Create a registry for the given host root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a registry for the host application in the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl ModuleRegistry for FilesystemModuleRegistry {
    fn exists(&self, name: &str) -> bool {
        name != RESERVED_MODULE && self.resolve_path(name).is_dir()
    }

    fn resolve_path(&self, name: &str) -> PathBuf {
        self.root.join(PACKAGES_DIR).join(name)
    }
}
