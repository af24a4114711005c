/**
 * JSON Collection File
 *
 * A `JsonStore<T>` owns one file containing a JSON array of `T`. Every read
 * loads the whole array; every write replaces the whole file. There is no
 * indexing and no partial update.
 *
 * # Consistency
 *
 * - Writes go to a sibling `.tmp` file which is then renamed over the
 *   collection file, so readers never see a half-written array.
 * - `update` holds an async mutex across its read-modify-write cycle, so two
 *   updates of the same collection in this process cannot interleave.
 * - A missing file is recreated as `[]` on first read.
 */

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;

use super::StoreError;

/// One flat-file collection
pub struct JsonStore<T> {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
    _records: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            write_lock: Arc::clone(&self.write_lock),
            _records: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for JsonStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonStore").field("path", &self.path).finish()
    }
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the collection file (and its directory) if it does not exist
    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        match tokio::fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.write_all(&[]).await?;
                tracing::info!("Created collection file: {}", self.path.display());
                Ok(())
            }
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Load every record in the collection
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Collection file {} missing, reinitialising as empty",
                    self.path.display()
                );
                self.write_all(&[]).await?;
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Read-modify-write the collection
    ///
    /// `mutate` receives the current records. If it returns `Ok`, the
    /// (possibly modified) records are written back before `update` returns;
    /// if it returns `Err`, nothing is written and the error is passed on.
    pub async fn update<R, E, F>(&self, mutate: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let result = mutate(&mut records)?;
        self.write_all(&records).await?;

        Ok(result)
    }

    async fn write_all(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records).map_err(|source| {
            StoreError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|source| StoreError::Io {
                path: tmp_path.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
