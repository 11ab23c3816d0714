//! JSON-backed ledger store with atomic persistence.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use super::entry::LedgerEntry;

/// Ledger file name inside the output directory. Shared with earlier
/// versions of the tool; renaming it would orphan every existing cache.
pub const LEDGER_FILE_NAME: &str = "urltopdf_metadata.json";

/// Errors from loading or persisting the ledger. A malformed file is fatal
/// to the whole run; there is no partial-recovery attempt.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("read ledger {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("ledger {path} is not valid JSON: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
    #[error("serialize ledger: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("write ledger {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Persistent URL → entry mapping. Owned by the batch loop and threaded
/// through it as a value, never ambient state.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: BTreeMap<String, LedgerEntry>,
}

impl Ledger {
    /// Loads the ledger at `path`. A missing file yields an empty ledger;
    /// anything unreadable or malformed is an error.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(LedgerError::Read {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        let entries = serde_json::from_slice(&bytes).map_err(|e| LedgerError::Malformed {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self { entries })
    }

    /// True if `url` already has an entry, whether from a prior run or
    /// earlier in this one.
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    pub fn get(&self, url: &str) -> Option<&LedgerEntry> {
        self.entries.get(url)
    }

    /// Records a completed conversion in memory. Call `persist` to make it
    /// durable.
    pub fn record(&mut self, url: &str, entry: LedgerEntry) {
        self.entries.insert(url.to_string(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the whole ledger to `path` atomically: serialize into a temp
    /// file in the same directory, fsync, then rename over the final path.
    /// A crash mid-persist leaves the previous ledger intact; a torn file
    /// is never observable.
    pub fn persist(&self, path: &Path) -> Result<(), LedgerError> {
        let json = serde_json::to_vec_pretty(&self.entries).map_err(LedgerError::Serialize)?;
        let write_err = |e: std::io::Error| LedgerError::Write {
            path: path.display().to_string(),
            source: e,
        };
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(&json).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
