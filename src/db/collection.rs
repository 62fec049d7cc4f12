use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::PartyResult;

/// A whole collection persisted as one JSON array document.
///
/// Reads are lock-free; writers go through `modify`, which holds the
/// collection's lock across the full read-modify-write cycle. The new
/// document is written beside the old one and renamed over it, so readers
/// never observe a truncated file.
pub struct JsonCollection<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current document. A missing file is an empty collection.
    pub fn load(&self) -> PartyResult<Vec<T>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Runs `f` against a fresh copy of the collection and persists the
    /// result. Nothing is written if `f` fails.
    pub fn modify<R>(&self, f: impl FnOnce(&mut Vec<T>) -> PartyResult<R>) -> PartyResult<R> {
        // The lock guards no data of its own, so a poisoned lock is still usable.
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut items = self.load()?;
        let result = f(&mut items)?;
        self.save(&items)?;
        Ok(result)
    }

    fn save(&self, items: &[T]) -> PartyResult<()> {
        let json = serde_json::to_string_pretty(items)?;
        let tmp = self.temp_path();

        let written = File::create(&tmp).and_then(|mut file| {
            file.write_all(json.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        debug!(path = %self.path.display(), records = items.len(), "collection written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
