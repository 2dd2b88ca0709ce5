use super::KvStore;
use crate::error::{Result, ShelfError};
use std::collections::HashMap;

/// In-memory blob store for testing and development. Does NOT persist.
///
/// Reads and writes can be made to fail on demand so callers' failure
/// handling (log-and-continue, fall back to empty) can be exercised.
#[derive(Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw blob access for assertions on persisted state.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(ShelfError::Store("injected read failure".to_string()));
        }
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(ShelfError::Store("injected write failure".to_string()));
        }
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.fail_writes {
            return Err(ShelfError::Store("injected write failure".to_string()));
        }
        self.blobs.remove(key);
        Ok(())
    }
}
