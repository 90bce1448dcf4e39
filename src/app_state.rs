//! Implements a struct that holds the state of the REST server.

use std::path::{Path, PathBuf};

use axum::extract::FromRef;

use crate::TransactionStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions created since the server started.
    pub transaction_store: TransactionStore,

    /// The directory containing the built frontend, i.e. `index.html` and its assets.
    pub asset_root: PathBuf,
}

impl AppState {
    /// Create a new [AppState] with an empty transaction store that serves
    /// static files from `asset_root`.
    pub fn new(asset_root: impl AsRef<Path>) -> Self {
        Self {
            transaction_store: TransactionStore::new(),
            asset_root: asset_root.as_ref().to_path_buf(),
        }
    }
}

impl FromRef<AppState> for TransactionStore {
    fn from_ref(state: &AppState) -> Self {
        state.transaction_store.clone()
    }
}
