use serde::{Deserialize, Serialize};

/// A book known to the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    /// Canonical name as written in citations (e.g. "1 Kings")
    pub name: String,

    /// Short code (e.g. "1Kgs")
    pub code: String,

    /// File stem of this book's data in the verse store
    pub store_key: String,

    /// Alternate spellings that resolve to this book
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl BookEntry {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        store_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            store_key: store_key.into(),
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }
}

impl std::fmt::Display for BookEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
