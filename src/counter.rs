//! Persisted dev-build counter.
//!
//! Dirty-tree builds consume one counter increment each, so two dev
//! builds from the same commit never share a version. The counter lives
//! in a single-integer file in the project root and is expected to be
//! gitignored. Reads and writes go through the `CounterStore` trait so
//! version resolution can run against in-memory state in tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::{Error, Result};

/// Storage for the dev-build counter.
///
/// `load` is read-only so version previews can inspect the counter
/// without consuming an increment.
pub trait CounterStore {
    /// Reads the current counter value.
    ///
    /// A missing or unparseable counter reads as zero; only I/O failures
    /// on an existing file are errors.
    fn load(&self) -> Result<u64>;

    /// Persists a new counter value.
    fn store(&mut self, value: u64) -> Result<()>;
}

/// `CounterStore` backed by a single-integer file
pub struct FileCounterStore {
    path: PathBuf,
}

impl FileCounterStore {
    /// Creates a store reading and writing the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a store for the conventional counter file in a project root.
    pub fn in_dir(root: &Path) -> Self {
        Self::new(root.join(defaults::COUNTER_FILE_NAME))
    }
}

impl CounterStore for FileCounterStore {
    fn load(&self) -> Result<u64> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.trim().parse().unwrap_or(0)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(Error::Counter {
                path: self.path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn store(&mut self, value: u64) -> Result<()> {
        fs::write(&self.path, value.to_string()).map_err(|e| Error::Counter {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// In-memory `CounterStore`, for tests and dry inspection
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    value: u64,
}

impl MemoryCounterStore {
    /// Creates a store starting from zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with an existing counter value.
    pub fn with_value(value: u64) -> Self {
        Self { value }
    }
}

impl CounterStore for MemoryCounterStore {
    fn load(&self) -> Result<u64> {
        Ok(self.value)
    }

    fn store(&mut self, value: u64) -> Result<()> {
        self.value = value;
        Ok(())
    }
}
