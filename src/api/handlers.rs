//! API handlers

use axum::{
    extract::{Path, State},
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Serialize;

use crate::api::{AppState, IndentedJson};
use crate::types::Album;
use crate::Error;

const ALBUM_NOT_FOUND: &str = "album not found";
const PAGE_NOT_FOUND: &str = "page not found";

/// Health check with catalogue size
pub async fn health(
    State(state): State<AppState>,
) -> Result<IndentedJson<HealthResponse>, ApiError> {
    let albums = state.store.len().await?;

    Ok(IndentedJson(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        albums,
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub albums: usize,
}

/// List every album in insertion order
pub async fn list_albums(
    State(state): State<AppState>,
) -> Result<IndentedJson<Vec<Album>>, ApiError> {
    let albums = state.store.list().await?;
    tracing::debug!(count = albums.len(), "Listing albums");
    Ok(IndentedJson(albums))
}

/// Fetch the first album whose id matches the path parameter
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Album>, ApiError> {
    match state.store.get(&id).await? {
        Some(album) => Ok(IndentedJson(album)),
        None => {
            tracing::debug!(%id, "Album lookup missed");
            Err(Error::not_found(id).into())
        }
    }
}

/// Append an album decoded from the request body
///
/// The body is decoded as JSON whatever the `Content-Type` header says. A body
/// that fails to decode leaves the collection untouched and yields 400.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, IndentedJson<Album>), ApiError> {
    let album = Album::from_body(&body).map_err(|err| {
        tracing::warn!(error = %err, "Rejected album payload");
        err
    })?;

    let album = state.store.append(album).await?;
    tracing::info!(id = %album.id, title = %album.title, "Album created");

    Ok((StatusCode::CREATED, IndentedJson(album)))
}

/// Unmatched routes
///
/// A path with a trailing slash is redirected to its trimmed form: 301 for GET,
/// 307 for other methods so the body is replayed. Everything else is a 404.
pub async fn fallback(method: Method, uri: Uri) -> Response {
    let path = uri.path();

    if path.len() > 1 && path.ends_with('/') {
        let mut location = path.trim_end_matches('/').to_string();
        if location.is_empty() {
            location.push('/');
        }
        if let Some(query) = uri.query() {
            location.push('?');
            location.push_str(query);
        }

        let status = if method == Method::GET || method == Method::HEAD {
            StatusCode::MOVED_PERMANENTLY
        } else {
            StatusCode::TEMPORARY_REDIRECT
        };
        tracing::debug!(%method, from = %path, to = %location, "Redirecting trailing slash");
        return (status, [(header::LOCATION, location)]).into_response();
    }

    ApiError {
        status: StatusCode::NOT_FOUND,
        message: PAGE_NOT_FOUND.to_string(),
    }
    .into_response()
}

/// Error body shared by every failure response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let (status, message) = match err {
            Error::AlbumNotFound(_) => (StatusCode::NOT_FOUND, ALBUM_NOT_FOUND.to_string()),
            Error::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Serialization(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = IndentedJson(MessageResponse {
            message: self.message,
        });
        (self.status, body).into_response()
    }
}
