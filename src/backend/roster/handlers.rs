/**
 * Roster HTTP Handlers
 *
 * One set of handlers serves both team members and players; routes pick
 * the record type with a turbofish, e.g. `list::<Player>`.
 *
 * # Routes
 *
 * - `GET    /api/{team,players}`      - list (auth)
 * - `GET    /api/{team,players}/{id}` - get one (auth)
 * - `POST   /api/{team,players}`      - create, multipart (admin)
 * - `PUT    /api/{team,players}/{id}` - update, multipart (admin)
 * - `DELETE /api/{team,players}/{id}` - delete (admin)
 */

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use super::record::{self, MediaRecord};
use crate::backend::error::BackendError;
use crate::backend::media::UploadForm;
use crate::backend::middleware::AdminUser;
use crate::backend::server::state::AppState;
use crate::shared::WithImageUrl;

/// `{"message": ..., <key>: <record>}`
fn record_body<T: Serialize>(message: String, key: &str, record: T) -> Result<Json<Value>, BackendError> {
    let mut body = Map::new();
    body.insert("message".to_string(), Value::String(message));
    body.insert(key.to_string(), serde_json::to_value(record)?);
    Ok(Json(Value::Object(body)))
}

pub async fn list<T: MediaRecord>(
    State(state): State<AppState>,
) -> Result<Json<Vec<WithImageUrl<T>>>, BackendError> {
    Ok(Json(record::list_records::<T>(&state).await?))
}

pub async fn get_one<T: MediaRecord>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WithImageUrl<T>>, BackendError> {
    Ok(Json(record::get_record::<T>(&state, &id).await?))
}

pub async fn create<T: MediaRecord>(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Value>), BackendError> {
    let form = UploadForm::parse(multipart, &state.media, T::COLLECTION).await?;
    let created = record::create_record::<T>(&state, &form).await?;

    tracing::debug!("{} added by {}", T::LABEL, admin.username);
    let body = record_body(
        format!("{} added successfully", T::LABEL),
        T::RESPONSE_KEY,
        created,
    )?;
    Ok((StatusCode::CREATED, body))
}

pub async fn update<T: MediaRecord>(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, BackendError> {
    let form = UploadForm::parse(multipart, &state.media, T::COLLECTION).await?;
    let updated = record::update_record::<T>(&state, &id, &form).await?;

    tracing::debug!("{} {} updated by {}", T::LABEL, id, admin.username);
    record_body(
        format!("{} updated successfully", T::LABEL),
        T::RESPONSE_KEY,
        updated,
    )
}

pub async fn delete<T: MediaRecord>(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, BackendError> {
    record::delete_record::<T>(&state, &id).await?;

    tracing::debug!("{} {} deleted by {}", T::LABEL, id, admin.username);
    Ok(Json(serde_json::json!({
        "message": format!("{} deleted successfully", T::LABEL),
        "id": id,
    })))
}
