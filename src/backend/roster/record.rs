/**
 * Records With Media
 *
 * Team members and players share one lifecycle: JSON records in a
 * collection file, each optionally pointing at one image in the
 * collection's media directory. `MediaRecord` describes a record type;
 * the functions here implement list/get/create/update/delete for any of
 * them while keeping records and files consistent:
 *
 * - an upload that never ends up referenced by a stored record is deleted
 * - a replaced or removed image is deleted only after the record write
 * - deleting a record tolerates its image file already being gone
 */

use serde::{de::DeserializeOwned, Serialize};

use crate::backend::error::BackendError;
use crate::backend::media::{MediaCollection, UploadForm};
use crate::backend::server::state::AppState;
use crate::backend::store::{Collections, JsonStore};
use crate::shared::{SharedError, WithImageUrl};

/// A record type stored in its own collection with an optional image
pub trait MediaRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Media collection holding the record's images
    const COLLECTION: MediaCollection;
    /// Name used in response messages, e.g. "Player"
    const LABEL: &'static str;
    /// Key of the record in single-record response bodies
    const RESPONSE_KEY: &'static str;

    fn store(collections: &Collections) -> &JsonStore<Self>;

    fn id(&self) -> &str;

    fn image_filename(&self) -> Option<&str>;

    fn set_image_filename(&mut self, filename: Option<String>);

    /// Build a new record from a submitted form
    ///
    /// Fails when a required field is missing or empty.
    fn from_form(form: &UploadForm, image_filename: Option<String>) -> Result<Self, SharedError>;

    /// Apply the submitted fields of an update form and refresh `updatedAt`
    fn merge_form(&mut self, form: &UploadForm);
}

/// Integer parse that accepts what a browser form tends to send
///
/// Surrounding whitespace is ignored and trailing garbage after the digits
/// is dropped (`" 7 "` and `"7th"` both give 7). Returns `None` when no
/// digits lead the value.
pub fn parse_int_lenient(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

fn not_found<T: MediaRecord>() -> BackendError {
    BackendError::not_found(format!("{} not found.", T::LABEL))
}

/// Attach the public image URL to a record
pub fn with_image_url<T: MediaRecord>(record: T) -> WithImageUrl<T> {
    let image_url = record
        .image_filename()
        .map(|filename| T::COLLECTION.public_url(filename));
    WithImageUrl { record, image_url }
}

pub async fn list_records<T: MediaRecord>(state: &AppState) -> Result<Vec<WithImageUrl<T>>, BackendError> {
    let records = T::store(&state.collections).load().await?;
    Ok(records.into_iter().map(with_image_url).collect())
}

pub async fn get_record<T: MediaRecord>(state: &AppState, id: &str) -> Result<WithImageUrl<T>, BackendError> {
    T::store(&state.collections)
        .load()
        .await?
        .into_iter()
        .find(|record| record.id() == id)
        .map(with_image_url)
        .ok_or_else(not_found::<T>)
}

/// Create a record from a parsed form, discarding the upload on failure
pub async fn create_record<T: MediaRecord>(
    state: &AppState,
    form: &UploadForm,
) -> Result<WithImageUrl<T>, BackendError> {
    let upload = form.file.as_ref().map(|f| f.filename.clone());

    match insert_record::<T>(state, form, upload.clone()).await {
        Ok(record) => {
            tracing::info!("{} created: {}", T::LABEL, record.id());
            Ok(with_image_url(record))
        }
        Err(e) => {
            if let Some(filename) = &upload {
                state.media.remove_best_effort(T::COLLECTION, filename).await;
            }
            Err(e)
        }
    }
}

async fn insert_record<T: MediaRecord>(
    state: &AppState,
    form: &UploadForm,
    upload: Option<String>,
) -> Result<T, BackendError> {
    let record = T::from_form(form, upload)?;

    let stored = record.clone();
    T::store(&state.collections)
        .update(move |records: &mut Vec<T>| -> Result<(), BackendError> {
            records.push(stored);
            Ok(())
        })
        .await?;

    Ok(record)
}

/// Update a record from a parsed form
///
/// A new upload replaces the image; otherwise `removeCurrentImage=true`
/// clears it. The image that is no longer referenced is deleted after the
/// record has been written.
pub async fn update_record<T: MediaRecord>(
    state: &AppState,
    id: &str,
    form: &UploadForm,
) -> Result<WithImageUrl<T>, BackendError> {
    let upload = form.file.as_ref().map(|f| f.filename.as_str());

    let (record, stale_image) = match apply_update::<T>(state, id, form, upload).await {
        Ok(updated) => updated,
        Err(e) => {
            if let Some(filename) = upload {
                state.media.remove_best_effort(T::COLLECTION, filename).await;
            }
            return Err(e);
        }
    };

    if let Some(old) = stale_image {
        state.media.remove_best_effort(T::COLLECTION, &old).await;
    }

    tracing::info!("{} updated: {}", T::LABEL, id);
    Ok(with_image_url(record))
}

async fn apply_update<T: MediaRecord>(
    state: &AppState,
    id: &str,
    form: &UploadForm,
    upload: Option<&str>,
) -> Result<(T, Option<String>), BackendError> {
    let remove_current = form.flag("removeCurrentImage");

    T::store(&state.collections)
        .update(|records: &mut Vec<T>| -> Result<(T, Option<String>), BackendError> {
            let record = records
                .iter_mut()
                .find(|record| record.id() == id)
                .ok_or_else(not_found::<T>)?;

            let old_image = record.image_filename().map(str::to_string);
            record.merge_form(form);

            if let Some(filename) = upload {
                record.set_image_filename(Some(filename.to_string()));
            } else if remove_current {
                record.set_image_filename(None);
            }

            let stale_image = old_image.filter(|old| record.image_filename() != Some(old.as_str()));
            Ok((record.clone(), stale_image))
        })
        .await
}

/// Delete a record, then its image
pub async fn delete_record<T: MediaRecord>(state: &AppState, id: &str) -> Result<(), BackendError> {
    let removed = T::store(&state.collections)
        .update(|records: &mut Vec<T>| -> Result<T, BackendError> {
            let index = records
                .iter()
                .position(|record| record.id() == id)
                .ok_or_else(not_found::<T>)?;
            Ok(records.remove(index))
        })
        .await?;

    if let Some(filename) = removed.image_filename() {
        state.media.remove_best_effort(T::COLLECTION, filename).await;
    }

    tracing::info!("{} deleted: {}", T::LABEL, id);
    Ok(())
}
