//! Sled-based key-value storage for user settings.

use crate::summary::SummaryStyle;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

const SUMMARY_STYLE_KEY: &str = "summary_style";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    DbError(#[from] sled::Error),
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Persistent settings such as the preferred summary style.
///
/// Values are stored as JSON under plain string keys.
pub struct Settings {
    db: sled::Db,
}

impl Settings {
    /// Open or create the settings store at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Read a value, `None` if the key was never written
    pub fn get<V: DeserializeOwned>(&self, key: &str) -> Result<Option<V>, StorageError> {
        match self.db.get(key.as_bytes())? {
            Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
            None => Ok(None),
        }
    }

    /// Write a value and flush it to disk
    pub fn set<V: Serialize>(&self, key: &str, value: &V) -> Result<(), StorageError> {
        let data = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), data)?;
        self.db.flush()?;
        Ok(())
    }

    /// Delete a key, returning whether it existed
    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let existed = self.db.remove(key.as_bytes())?.is_some();
        self.db.flush()?;
        Ok(existed)
    }

    /// Stored summary style, falling back to the default
    pub fn summary_style(&self) -> Result<SummaryStyle, StorageError> {
        Ok(self.get(SUMMARY_STYLE_KEY)?.unwrap_or_default())
    }

    pub fn set_summary_style(&self, style: SummaryStyle) -> Result<(), StorageError> {
        self.set(SUMMARY_STYLE_KEY, &style)
    }
}
