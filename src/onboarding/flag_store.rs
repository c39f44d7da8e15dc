// SPDX-License-Identifier: MPL-2.0
//! Boolean key-value flags that outlive a session.
//!
//! The onboarding flow only needs "has the user finished onboarding", but the
//! store is keyed so hosts can keep other first-run flags beside it.
//! [`FileFlagStore`] keeps the map in CBOR in the data directory; the format
//! is not meant to be edited by hand, unlike `settings.toml`.

use crate::error::{Error, Result};
use crate::paths;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Flag file name within the data directory.
const FLAGS_FILE: &str = "flags.cbor";

/// Persistent boolean flags, injected into hosts that need them.
pub trait FlagStore {
    /// Returns the stored value, or `None` if the key was never set.
    fn get(&self, key: &str) -> Option<bool>;

    fn set(&mut self, key: &str, value: bool) -> Result<()>;
}

/// Flags kept in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    flags: BTreeMap<String, bool>,
}

impl MemoryFlagStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    fn set(&mut self, key: &str, value: bool) -> Result<()> {
        self.flags.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Flags persisted to a CBOR file, rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileFlagStore {
    path: PathBuf,
    flags: BTreeMap<String, bool>,
}

impl FileFlagStore {
    /// Opens the store in the data directory.
    ///
    /// # Path Resolution
    ///
    /// 1. `base_dir` parameter (if `Some`)
    /// 2. CLI `--data-dir`, then `SNAPBACK_DATA_DIR`
    /// 3. Platform-specific data directory
    pub fn open(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = paths::get_app_data_dir_with_override(base_dir)
            .ok_or_else(|| Error::Store("no data directory available".into()))?;
        Ok(Self::open_at(dir.join(FLAGS_FILE)))
    }

    /// Opens the store at an explicit file path.
    ///
    /// A missing file yields an empty store. An unreadable or corrupt file
    /// also yields an empty store, with a warning; it is overwritten on the
    /// next `set`.
    #[must_use]
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let flags = match Self::read(&path) {
            Ok(flags) => flags,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "starting with empty flag store");
                BTreeMap::new()
            }
        };
        Self { path, flags }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> Result<BTreeMap<String, bool>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let reader = BufReader::new(fs::File::open(path)?);
        ciborium::from_reader(reader).map_err(|err| Error::Store(err.to_string()))
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(&self.flags, writer).map_err(|err| Error::Store(err.to_string()))
    }
}

impl FlagStore for FileFlagStore {
    fn get(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    /// Updates the in-memory value first, so a failed write still reflects
    /// the latest value for the rest of the session.
    fn set(&mut self, key: &str, value: bool) -> Result<()> {
        self.flags.insert(key.to_owned(), value);
        self.write()
    }
}
