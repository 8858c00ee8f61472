use crate::core::error::DatasetError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// One raw roster entry as it appears in the bundled JSON file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetEntry {
    pub name: String,
    #[serde(rename = "bananas")]
    pub score: i64,
    #[serde(default)]
    pub last_day_played: String,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub subscribed: bool,
}

/// Read-only roster source, keyed by user id in file order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<(String, DatasetEntry)>,
}

impl Dataset {
    pub fn new(entries: Vec<(String, DatasetEntry)>) -> Self {
        Self { entries }
    }

    /// Load a dataset from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&content)
    }

    /// Parse a dataset from JSON text
    ///
    /// Key order of the top-level object is kept, since it breaks score ties
    /// when ranks are assigned.
    pub fn from_json_str(content: &str) -> Result<Self, DatasetError> {
        let raw: Map<String, Value> = serde_json::from_str(content)?;

        let entries = raw
            .into_iter()
            .map(|(id, value)| match serde_json::from_value::<DatasetEntry>(value) {
                Ok(entry) => Ok((id, entry)),
                Err(source) => Err(DatasetError::InvalidEntry { id, source }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(String, DatasetEntry)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
