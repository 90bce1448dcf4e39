//! Serves the built frontend from the asset directory.
//!
//! Paths that do not name a readable file fall back to `index.html` so that
//! client-side routes such as `/dashboard` load the single-page app. Files are
//! read from disk on every request.

use std::path::{Path, PathBuf};

use axum::{
    extract::{FromRef, State},
    http::{Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tokio::fs;

use crate::{AppState, Error};

/// The entry point of the frontend, relative to the asset directory.
pub const INDEX_FILE: &str = "index.html";

const HTML: &str = "text/html";

/// The state needed to serve static files.
#[derive(Debug, Clone)]
pub struct StaticFileState {
    /// The directory that asset paths are resolved against.
    pub asset_root: PathBuf,
}

impl FromRef<AppState> for StaticFileState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            asset_root: state.asset_root.clone(),
        }
    }
}

/// A route handler for the root path, serves `index.html`.
pub async fn get_index_page(State(state): State<StaticFileState>) -> Response {
    match fs::read(state.asset_root.join(INDEX_FILE)).await {
        Ok(contents) => ([(CONTENT_TYPE, HTML)], contents).into_response(),
        Err(error) => {
            tracing::warn!(
                "Could not read {} from {}: {error}",
                INDEX_FILE,
                state.asset_root.display()
            );
            Error::FrontendNotBuilt.into_response()
        }
    }
}

/// A route handler for every path not matched by another route.
///
/// The raw request path is used, i.e. it is not percent-decoded.
pub async fn get_static_asset(State(state): State<StaticFileState>, uri: Uri) -> Response {
    let asset_path = uri.path().trim_start_matches('/');

    match read_asset(&state.asset_root, asset_path).await {
        Ok((content_type, contents)) => ([(CONTENT_TYPE, content_type)], contents).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Read `asset_path` from `asset_root`, falling back to `index.html` if it cannot be read.
///
/// An empty `asset_path` resolves to `index.html`. Returns the content type and the file contents.
///
/// # Errors
///
/// Returns [Error::Forbidden] if `asset_path` contains "..", without touching the
/// filesystem. This is a plain substring check, so percent-encoded sequences are
/// not caught. Returns [Error::FileNotFound] if neither file can be read.
pub async fn read_asset(
    asset_root: &Path,
    asset_path: &str,
) -> Result<(&'static str, Vec<u8>), Error> {
    let asset_path = if asset_path.is_empty() {
        INDEX_FILE
    } else {
        asset_path
    };

    if asset_path.contains("..") {
        tracing::warn!("Rejected asset path {asset_path:?}");
        return Err(Error::Forbidden);
    }

    match fs::read(asset_root.join(asset_path)).await {
        Ok(contents) => Ok((content_type_for(asset_path), contents)),
        Err(error) => {
            tracing::debug!("Serving {INDEX_FILE} in place of {asset_path:?}: {error}");

            fs::read(asset_root.join(INDEX_FILE))
                .await
                .map(|contents| (HTML, contents))
                .map_err(|_| Error::FileNotFound)
        }
    }
}

/// Get the MIME type for `path` from its extension, i.e. everything from the last '.'.
///
/// Unknown or missing extensions map to "text/plain".
pub fn content_type_for(path: &str) -> &'static str {
    let Some(extension_start) = path.rfind('.') else {
        return "text/plain";
    };

    match &path[extension_start..] {
        ".html" => HTML,
        ".css" => "text/css",
        ".js" => "application/javascript",
        ".json" => "application/json",
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".svg" => "image/svg+xml",
        ".ico" => "image/x-icon",
        _ => "text/plain",
    }
}
