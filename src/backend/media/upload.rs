/**
 * Multipart Upload Parsing
 *
 * Reads a `multipart/form-data` body into its text fields plus at most one
 * file, which is streamed straight to its final location in the
 * collection's media directory before any handler logic runs.
 *
 * Handlers therefore own the stored file from the moment parsing succeeds
 * and must delete it again if the request fails later (validation errors,
 * unknown record, store write failure).
 */

use std::collections::HashMap;
use std::path::PathBuf;

use axum::extract::multipart::Field;
use axum::extract::multipart::MultipartRejection;
use axum::extract::Multipart;
use tokio::io::AsyncWriteExt;

use super::{MediaCollection, MediaError, MediaStore};

/// A file written to media storage during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Generated file name inside the collection directory
    pub filename: String,
    pub path: PathBuf,
    /// Bytes written
    pub size: u64,
}

/// Parsed multipart form
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    pub file: Option<StoredUpload>,
}

impl UploadForm {
    /// Parse a multipart body, storing the collection's file field
    ///
    /// A file part with an empty file name (a form submitted without
    /// choosing a file) is ignored. File parts under any other field name
    /// are rejected. If parsing fails after the file was stored, the file is
    /// removed before the error is returned.
    ///
    /// Takes the extractor result as-is so a request that is not
    /// `multipart/form-data` is answered with the API's JSON error body.
    pub async fn parse(
        multipart: Result<Multipart, MultipartRejection>,
        media: &MediaStore,
        collection: MediaCollection,
    ) -> Result<Self, MediaError> {
        let mut multipart = multipart?;
        let mut form = UploadForm::default();

        let result = form.read_fields(&mut multipart, media, collection).await;
        if let Err(e) = result {
            if let Some(stored) = form.file.take() {
                media.remove_best_effort(collection, &stored.filename).await;
            }
            return Err(e);
        }

        if let Some(stored) = &form.file {
            tracing::debug!(
                "Stored upload {} ({} bytes)",
                stored.path.display(),
                stored.size
            );
        }
        Ok(form)
    }

    async fn read_fields(
        &mut self,
        multipart: &mut Multipart,
        media: &MediaStore,
        collection: MediaCollection,
    ) -> Result<(), MediaError> {
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            match field.file_name().map(str::to_string) {
                Some(original) if original.is_empty() => {
                    // empty file input
                    continue;
                }
                Some(original) => {
                    if name != collection.field_name() || self.file.is_some() {
                        return Err(MediaError::UnexpectedField(name));
                    }
                    self.file = Some(store_field(field, media, collection, &original).await?);
                }
                None => {
                    let value = field.text().await?;
                    self.fields.insert(name, value);
                }
            }
        }
        Ok(())
    }

    /// Text value of a field, if it was sent
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Text value of a field, treating an empty value as absent
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.text(name).filter(|v| !v.is_empty())
    }

    /// Whether a boolean-like flag field is `true`, ignoring surrounding whitespace
    pub fn flag(&self, name: &str) -> bool {
        self.text(name).is_some_and(|v| v.trim() == "true")
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)], file: Option<StoredUpload>) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            file,
        }
    }
}

async fn store_field(
    mut field: Field<'_>,
    media: &MediaStore,
    collection: MediaCollection,
    original_name: &str,
) -> Result<StoredUpload, MediaError> {
    let (filename, path, mut file) = media.create_file(collection, original_name).await?;

    let mut size: u64 = 0;
    let written: Result<(), MediaError> = async {
        while let Some(chunk) = field.chunk().await? {
            file.write_all(&chunk).await.map_err(|source| MediaError::Io {
                path: path.clone(),
                source,
            })?;
            size += chunk.len() as u64;
        }
        file.flush().await.map_err(|source| MediaError::Io {
            path: path.clone(),
            source,
        })
    }
    .await;

    if let Err(e) = written {
        drop(file);
        media.remove_best_effort(collection, &filename).await;
        return Err(e);
    }

    Ok(StoredUpload {
        filename,
        path,
        size,
    })
}
