use toml::Value;
use toml::value::Table;

/// Source-string to translated-string mapping for one resource and locale.
///
/// Built by folding remote string records left to right; a later record for the
/// same source string overwrites the earlier translation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationMap {
    entries: Table,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `(source, translation)` records into a map, last record winning.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut map = Self::new();
        for (source, translation) in records {
            map.insert(source, translation);
        }
        map
    }

    pub fn insert(&mut self, source: String, translation: String) {
        self.entries.insert(source, Value::String(translation));
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn as_table(&self) -> &Table {
        &self.entries
    }

    pub(crate) fn from_table(entries: Table) -> Self {
        Self { entries }
    }
}
