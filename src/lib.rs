//! A small personal-finance tracker backend.
//!
//! This library provides a JSON REST API over an in-memory list of
//! transactions and serves a bundled single-page frontend, falling back to
//! `index.html` so that client-side routes resolve.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod config;
mod cors;
pub mod endpoints;
mod health;
mod logging;
mod routing;
mod static_files;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::Config;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use static_files::INDEX_FILE;
pub use transaction::{
    NewTransaction, Transaction, TransactionCreated, TransactionId, TransactionStore,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// Each variant maps to exactly one HTTP status code and its [Display](std::fmt::Display)
/// text is sent to the client as a plain-text body.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body could not be parsed as JSON.
    #[error("Invalid JSON")]
    InvalidJson,

    /// The request body was valid JSON but did not describe a transaction,
    /// e.g. a field was missing or had the wrong type.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No transaction has the requested ID.
    #[error("Transaction not found")]
    TransactionNotFound,

    /// The path is under `/api` but no endpoint is registered for it.
    #[error("Not found")]
    ApiNotFound,

    /// The endpoint exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The requested asset path looks like a directory traversal attempt.
    #[error("Forbidden")]
    Forbidden,

    /// Neither the requested asset nor the fallback `index.html` could be read.
    #[error("File not found")]
    FileNotFound,

    /// The root page was requested but `index.html` is missing from the asset directory.
    #[error("Frontend not built")]
    FrontendNotBuilt,

    /// Could not acquire the transaction store lock.
    ///
    /// This only happens if another thread panicked while holding the lock.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,
}

impl Error {
    /// The HTTP status code sent to the client for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::TransactionNotFound
            | Error::ApiNotFound
            | Error::FileNotFound
            | Error::FrontendNotBuilt => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Forbidden => StatusCode::FORBIDDEN,
            Error::StoreLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            // Internal details stay in the server logs.
            Error::StoreLockError => {
                tracing::error!("An unexpected error occurred: {}", self);
                (self.status_code(), "Internal server error").into_response()
            }
            error => (error.status_code(), error.to_string()).into_response(),
        }
    }
}
