use super::KvStore;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed blob store. Each key becomes one `<key>.json` file under
/// the root directory, which is created on first write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &str) -> Result<PathBuf> {
        // Keys are store-internal constants, but reject anything that
        // could escape the root directory.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(ShelfError::Store(format!("invalid store key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        let path = self.blob_path(key)?;
        fs::write(path, value).map_err(ShelfError::Io)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}
