//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, options},
};

use crate::{
    AppState, Error,
    cors::{add_cors_layers, preflight},
    endpoints,
    health::get_health,
    logging_middleware,
    static_files::{get_index_page, get_static_asset},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
        list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every `/api` path answers CORS preflight requests. Any other path is served
/// from the asset directory in `state`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint)
                .post(create_transaction_endpoint)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .delete(delete_transaction_endpoint)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            endpoints::HEALTH,
            get(get_health)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            endpoints::API_ANY,
            options(preflight).fallback(get_api_not_found),
        )
        .route_layer(middleware::from_fn(logging_middleware));

    let router = api_routes
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::STATIC_ASSET, get(get_static_asset))
        .with_state(state);

    add_cors_layers(router)
}

async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}

/// Paths under `/api` are never served as static files.
async fn get_api_not_found() -> Error {
    Error::ApiNotFound
}
