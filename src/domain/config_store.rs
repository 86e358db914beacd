//! Nested key/value store for the persisted fetcher configuration.

use toml::Value;
use toml::value::Table;

use crate::domain::AppError;

/// Tree of string keys to values, addressed by dot-separated paths, with dirty
/// tracking.
///
/// The tree is an insertion-ordered TOML table so module and resource-mapping
/// order survives a dump/load round trip. Mutations only happen through [`set`]
/// and [`remove`]; persistence is the caller's responsibility.
///
/// [`set`]: ConfigStore::set
/// [`remove`]: ConfigStore::remove
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    root: Table,
    dirty: bool,
}

impl ConfigStore {
    /// Create an empty, clean store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted configuration document. The resulting store is not dirty.
    pub fn load(text: &str) -> Result<Self, AppError> {
        let root: Table = toml::from_str(text)?;
        Ok(Self { root, dirty: false })
    }

    /// Serialize the full tree into a loadable document.
    pub fn dump(&self) -> Result<String, AppError> {
        Ok(toml::to_string_pretty(&self.root)?)
    }

    /// Value at `path`, or `None` if any segment is missing.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_table()?.get(segment)?;
        }
        Some(current)
    }

    /// String value at `path`, if present and a string.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Table value at `path`, if present and a table.
    pub fn get_table(&self, path: &str) -> Option<&Table> {
        self.get(path).and_then(Value::as_table)
    }

    /// Write `value` at `path`, creating intermediate tables as needed.
    ///
    /// A non-table value sitting on an intermediate segment is replaced by a
    /// table, so `set` always succeeds.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        self.dirty = true;

        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(leaf) = segments.pop() else { return };

        let mut table = &mut self.root;
        for segment in segments {
            let entry =
                table.entry(segment.to_string()).or_insert_with(|| Value::Table(Table::new()));
            if !entry.is_table() {
                *entry = Value::Table(Table::new());
            }
            table = match entry.as_table_mut() {
                Some(next) => next,
                None => return,
            };
        }
        table.insert(leaf.to_string(), value.into());
    }

    /// Delete the entire subtree at `path`. Absent paths are a no-op.
    pub fn remove(&mut self, path: &str) {
        self.dirty = true;

        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(leaf) = segments.pop() else { return };

        let mut table = &mut self.root;
        for segment in segments {
            match table.get_mut(segment).and_then(Value::as_table_mut) {
                Some(next) => table = next,
                None => return,
            }
        }
        table.remove(leaf);
    }

    /// Whether at least one mutation happened since load or creation.
    pub fn dirty(&self) -> bool {
        self.dirty
    }
}
