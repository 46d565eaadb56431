//! Key-value storage port.
//!
//! The engine never talks to a concrete store directly; hosts inject an
//! implementation (the browser facade wraps `localStorage`, tests use
//! [`MemoryStore`]). Reads never error: corrupt or missing values surface
//! as absent. Last write wins, no transactionality.

use std::collections::HashMap;
use std::fmt;

/// A storage write that could not be completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    pub detail: String,
}

impl StorageError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage write failed: {}", self.detail)
    }
}

impl std::error::Error for StorageError {}

pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and native hosts without a backing file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
