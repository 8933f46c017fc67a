//! Save/load persistence for query results.
//!
//! [`YahooData::save`] runs a producer (usually a query against the Yahoo
//! Fantasy API), writes its result as pretty JSON under the record's storage
//! location and hands the result back untouched. [`YahooData::load`] and
//! [`YahooData::load_as`] read the record back, either as raw structured data
//! or coerced into a typed model. Nothing is cached in memory: every load
//! re-reads the file.

use serde::Serialize;
use serde_json::Value;
use std::{
    collections::HashMap,
    fs,
    future::Future,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::{debug, info};

use super::model::FromStructuredData;
use crate::core::{
    cache::DATA_FILE_EXTENSION, data_file_path, try_read_to_string, validate_key,
    write_string_atomic, DataConfig,
};
use crate::{Result, YahooError};

/// Persistent store of query results, rooted at a base data directory.
#[derive(Debug)]
pub struct YahooData {
    config: DataConfig,
    write_locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl YahooData {
    pub fn new(config: DataConfig) -> Self {
        Self {
            config,
            write_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Base directory used when a call does not pass `new_data_dir`.
    pub fn data_dir(&self) -> &Path {
        self.config.data_dir()
    }

    /// Resolve the storage location of `key`, validating the key first.
    pub fn location(&self, key: &str, new_data_dir: Option<&Path>) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(data_file_path(self.data_dir(), new_data_dir, key))
    }

    /// Run `producer`, persist its result under `key`, and return the result.
    ///
    /// A producer failure is returned as-is and nothing is written.
    pub fn save<T, E, F>(
        &self,
        key: &str,
        producer: F,
        new_data_dir: Option<&Path>,
    ) -> std::result::Result<T, E>
    where
        T: Serialize,
        E: From<YahooError>,
        F: FnOnce() -> std::result::Result<T, E>,
    {
        let path = self.location(key, new_data_dir)?;
        let data = producer()?;
        self.write_record(key, &path, &data)?;
        Ok(data)
    }

    /// Like [`save`](Self::save), passing `params` through to the producer.
    pub fn save_with<P, T, E, F>(
        &self,
        key: &str,
        producer: F,
        params: P,
        new_data_dir: Option<&Path>,
    ) -> std::result::Result<T, E>
    where
        T: Serialize,
        E: From<YahooError>,
        F: FnOnce(P) -> std::result::Result<T, E>,
    {
        self.save(key, move || producer(params), new_data_dir)
    }

    /// Like [`save`](Self::save) for producers that query the API asynchronously.
    pub async fn save_async<T, E, F, Fut>(
        &self,
        key: &str,
        producer: F,
        new_data_dir: Option<&Path>,
    ) -> std::result::Result<T, E>
    where
        T: Serialize,
        E: From<YahooError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        let path = self.location(key, new_data_dir)?;
        let data = producer().await?;
        self.write_record(key, &path, &data)?;
        Ok(data)
    }

    /// Load the record saved under `key` as untyped structured data.
    pub fn load(&self, key: &str, new_data_dir: Option<&Path>) -> Result<Value> {
        let path = self.location(key, new_data_dir)?;
        debug!(key, path = %path.display(), "loading saved data");

        let contents = try_read_to_string(&path)?.ok_or_else(|| YahooError::NotFound {
            key: key.to_string(),
            path: path.clone(),
        })?;

        serde_json::from_str(&contents)
            .map_err(|source| YahooError::Deserialization { path, source })
    }

    /// Load the record saved under `key` and build `M` from it.
    ///
    /// `M` may be a model, `Vec<model>`, or `ModelData<model>` to accept
    /// either shape.
    pub fn load_as<M: FromStructuredData>(
        &self,
        key: &str,
        new_data_dir: Option<&Path>,
    ) -> Result<M> {
        let value = self.load(key, new_data_dir)?;
        M::from_structured_data(value)
    }

    pub fn exists(&self, key: &str, new_data_dir: Option<&Path>) -> Result<bool> {
        Ok(self.location(key, new_data_dir)?.is_file())
    }

    /// Delete the record saved under `key`. Returns whether a record was removed.
    pub fn remove(&self, key: &str, new_data_dir: Option<&Path>) -> Result<bool> {
        let path = self.location(key, new_data_dir)?;

        match self.with_path_lock(&path, || fs::remove_file(&path)) {
            Ok(()) => {
                info!(key, path = %path.display(), "removed saved data");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Sorted keys of every record stored directly in the directory.
    pub fn list_keys(&self, new_data_dir: Option<&Path>) -> Result<Vec<String>> {
        let dir = new_data_dir.unwrap_or(self.data_dir());
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(DATA_FILE_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn write_record<T: Serialize>(&self, key: &str, path: &Path, data: &T) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(data).map_err(|source| YahooError::Serialization {
                key: key.to_string(),
                source,
            })?;

        self.with_path_lock(path, || write_string_atomic(path, &contents))?;

        info!(key, path = %path.display(), bytes = contents.len(), "saved data");
        Ok(())
    }

    /// Run `f` holding the lock of `path`, serializing writers of the same record.
    ///
    /// The lock is dropped from the map once no other writer holds or waits
    /// on it, so the map only holds paths being written.
    fn with_path_lock<R>(&self, path: &Path, f: impl FnOnce() -> R) -> R {
        let lock = {
            let mut locks = self.write_locks.lock().unwrap_or_else(|e| e.into_inner());
            locks.entry(path.to_path_buf()).or_default().clone()
        };

        let result = {
            let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
            f()
        };

        let mut locks = self.write_locks.lock().unwrap_or_else(|e| e.into_inner());
        // Held by the map and by us only.
        if Arc::strong_count(&lock) == 2 {
            locks.remove(path);
        }
        result
    }

    #[cfg(test)]
    pub(crate) fn tracked_locks(&self) -> usize {
        self.write_locks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}
