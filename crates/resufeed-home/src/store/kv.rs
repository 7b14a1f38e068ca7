//! Key-value store seam and its implementations.
//!
//! The store lists serialized records by key pattern (literal prefix plus an
//! optional trailing `*`). The file-backed implementation seeds itself from a
//! JSONL file of `{"key":…,"value":…}` lines at startup.

use std::io::BufRead;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::types::ResumeRecord;

/// Key pattern under which resume records are stored.
pub const RESUME_KEY_PATTERN: &str = "resume:*";

/// Store failures surfaced to the page.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store line {line}: {source}")]
    MalformedLine {
        line: usize,
        source: serde_json::Error,
    },

    #[error("undecodable record {key}: {source}")]
    BadRecord {
        key: String,
        source: serde_json::Error,
    },
}

/// One stored entry. `value` is omitted when values were not requested.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KvEntry {
    pub key: String,

    #[serde(default)]
    pub value: Option<String>,
}

/// Pattern-based listing over stored entries.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Lists entries whose keys match `pattern`, in store order. Values are
    /// included only when `include_values` is set.
    async fn list(&self, pattern: &str, include_values: bool)
        -> Result<Vec<KvEntry>, StoreError>;
}

/// Whether a key matches a glob-lite pattern: a trailing `*` matches any
/// suffix, otherwise the match is exact.
pub fn key_matches(pattern: &str, key: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => key.starts_with(prefix),
        None => key == pattern,
    }
}

fn list_entries(entries: &[KvEntry], pattern: &str, include_values: bool) -> Vec<KvEntry> {
    entries
        .iter()
        .filter(|entry| key_matches(pattern, &entry.key))
        .map(|entry| {
            if include_values {
                entry.clone()
            } else {
                KvEntry {
                    key: entry.key.clone(),
                    value: None,
                }
            }
        })
        .collect()
}

/// Seedable in-memory store, used in tests and as the empty default.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: Vec<KvEntry>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry; listing preserves insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(KvEntry {
            key: key.into(),
            value: Some(value.into()),
        });
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn list(
        &self,
        pattern: &str,
        include_values: bool,
    ) -> Result<Vec<KvEntry>, StoreError> {
        Ok(list_entries(&self.entries, pattern, include_values))
    }
}

/// Store seeded from a JSONL file, one `KvEntry` per line.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    entries: Vec<KvEntry>,
}

impl FileKvStore {
    /// Loads the full file up front; blank lines are skipped, any
    /// unparseable line fails the load.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let mut entries = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let entry =
                serde_json::from_str(trimmed).map_err(|source| StoreError::MalformedLine {
                    line: index + 1,
                    source,
                })?;
            entries.push(entry);
        }

        tracing::info!("Loaded {} store entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }
}

#[async_trait]
impl KvStore for FileKvStore {
    async fn list(
        &self,
        pattern: &str,
        include_values: bool,
    ) -> Result<Vec<KvEntry>, StoreError> {
        Ok(list_entries(&self.entries, pattern, include_values))
    }
}

/// What to do with a stored record whose value does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Log and drop the bad record; the rest of the list still renders.
    #[default]
    Skip,
    /// Abort the whole load with the parse error.
    Strict,
}

/// Deserializes listed entries into resume records under `policy`.
///
/// Entries without a value carry nothing to decode and are dropped either way.
pub fn parse_resume_entries(
    entries: &[KvEntry],
    policy: ParsePolicy,
) -> Result<Vec<ResumeRecord>, StoreError> {
    let mut records = Vec::new();
    for entry in entries {
        let Some(value) = &entry.value else {
            tracing::debug!("Entry {} listed without a value", entry.key);
            continue;
        };
        match serde_json::from_str::<ResumeRecord>(value) {
            Ok(record) => records.push(record),
            Err(source) => match policy {
                ParsePolicy::Skip => {
                    tracing::warn!("Skipping undecodable record {}: {}", entry.key, source);
                }
                ParsePolicy::Strict => {
                    return Err(StoreError::BadRecord {
                        key: entry.key.clone(),
                        source,
                    });
                }
            },
        }
    }
    Ok(records)
}

/// The page's one-shot fetch: list resume entries with values and decode
/// them, preserving store order.
pub async fn load_resumes(
    store: &dyn KvStore,
    policy: ParsePolicy,
) -> Result<Vec<ResumeRecord>, StoreError> {
    let entries = store.list(RESUME_KEY_PATTERN, true).await?;
    parse_resume_entries(&entries, policy)
}
