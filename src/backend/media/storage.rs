/**
 * Media Storage
 *
 * Uploaded images are stored on the local filesystem, one directory per
 * collection under the uploads root:
 *
 * ```text
 * uploads/
 * ├── gallery/        gallery-<millis>-<name>
 * ├── team_images/    team-<millis>-<name>
 * └── player_images/  player-<millis>-<name>
 * ```
 *
 * The uploads root is also served read-only under `/uploads`, so the public
 * URL of a file is `/uploads/<dir>/<filename>`.
 */

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};

use super::MediaError;

/// URL prefix under which the uploads root is served
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Media collections and their on-disk layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCollection {
    Gallery,
    Team,
    Players,
}

impl MediaCollection {
    pub const ALL: [MediaCollection; 3] = [
        MediaCollection::Gallery,
        MediaCollection::Team,
        MediaCollection::Players,
    ];

    /// Directory name under the uploads root
    pub fn dir_name(&self) -> &'static str {
        match self {
            MediaCollection::Gallery => "gallery",
            MediaCollection::Team => "team_images",
            MediaCollection::Players => "player_images",
        }
    }

    /// Prefix of generated file names
    pub fn file_prefix(&self) -> &'static str {
        match self {
            MediaCollection::Gallery => "gallery",
            MediaCollection::Team => "team",
            MediaCollection::Players => "player",
        }
    }

    /// Multipart field carrying the upload
    pub fn field_name(&self) -> &'static str {
        match self {
            MediaCollection::Gallery => "galleryImage",
            MediaCollection::Team => "teamImage",
            MediaCollection::Players => "playerImage",
        }
    }

    /// Public URL of a stored file
    pub fn public_url(&self, filename: &str) -> String {
        format!("{}/{}/{}", UPLOADS_URL_PREFIX, self.dir_name(), filename)
    }
}

/// Filesystem-backed media storage
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir(&self, collection: MediaCollection) -> PathBuf {
        self.root.join(collection.dir_name())
    }

    /// Create the uploads root and every collection directory
    pub async fn ensure_dirs(&self) -> Result<(), MediaError> {
        for collection in MediaCollection::ALL {
            let dir = self.dir(collection);
            if tokio::fs::metadata(&dir).await.is_err() {
                tokio::fs::create_dir_all(&dir)
                    .await
                    .map_err(|source| MediaError::Io {
                        path: dir.clone(),
                        source,
                    })?;
                tracing::info!("Created directory: {}", dir.display());
            }
        }
        Ok(())
    }

    /// Path of a stored file, rejecting names that could escape the
    /// collection directory
    pub fn path_of(&self, collection: MediaCollection, filename: &str) -> Result<PathBuf, MediaError> {
        validate_filename(filename)?;
        Ok(self.dir(collection).join(filename))
    }

    /// Create a new, uniquely named file for an upload
    ///
    /// The name is `<prefix>-<unix millis>-<original name>` with whitespace
    /// runs replaced by `_`. If that name is already taken the timestamp is
    /// bumped until a free name is found.
    pub async fn create_file(
        &self,
        collection: MediaCollection,
        original_name: &str,
    ) -> Result<(String, PathBuf, File), MediaError> {
        let base = sanitize_original_name(original_name);
        let mut millis = chrono::Utc::now().timestamp_millis();

        loop {
            let filename = format!("{}-{}-{}", collection.file_prefix(), millis, base);
            let path = self.dir(collection).join(&filename);
            match OpenOptions::new().write(true).create_new(true).open(&path).await {
                Ok(file) => return Ok((filename, path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => millis += 1,
                Err(source) => return Err(MediaError::Io { path, source }),
            }
        }
    }

    /// Names of all files in a collection directory, sorted
    pub async fn list(&self, collection: MediaCollection) -> Result<Vec<String>, MediaError> {
        let dir = self.dir(collection);
        let io_err = |source| MediaError::Io {
            path: dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&dir).await.map_err(io_err)?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if is_file {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Delete a stored file
    pub async fn remove(&self, collection: MediaCollection, filename: &str) -> Result<(), MediaError> {
        let path = self.path_of(collection, filename)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|source| MediaError::Io { path, source })
    }

    /// Delete a stored file, logging instead of failing
    ///
    /// Used for compensating deletes and for cleaning up a record's old
    /// image once the record itself has been updated.
    pub async fn remove_best_effort(&self, collection: MediaCollection, filename: &str) {
        match self.remove(collection, filename).await {
            Ok(()) => tracing::info!("Deleted {} image: {}", collection.file_prefix(), filename),
            Err(e) => tracing::error!(
                "Failed to delete {} image {}: {}",
                collection.file_prefix(),
                filename,
                e
            ),
        }
    }
}

/// Reject anything that is not a single plain path component
pub fn validate_filename(filename: &str) -> Result<(), MediaError> {
    let bad = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\', '\0']);
    if bad {
        return Err(MediaError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}

/// Keep only the final path component and collapse whitespace runs into `_`
fn sanitize_original_name(original_name: &str) -> String {
    let last = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let mut out = String::with_capacity(last.len());
    let mut in_whitespace = false;
    for c in last.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else if c != '\0' {
            out.push(c);
            in_whitespace = false;
        }
    }

    match out.as_str() {
        "" | "." | ".." => "upload".to_string(),
        _ => out,
    }
}
