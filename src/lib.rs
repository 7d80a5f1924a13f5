pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod quote;
pub mod rates;
pub mod services;
pub mod store;
pub mod validation;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::rates::RateTable;
use crate::store::TransactionStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TransactionStore>,
    pub rates: RateTable,
    pub config: Config,
}

pub fn create_app(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route(
            "/transactions/:id/confirm-funds",
            patch(handlers::admin::confirm_funds),
        )
        .route(
            "/transactions/:id/complete",
            patch(handlers::admin::complete),
        )
        .route("/analytics", get(handlers::admin::analytics))
        .route("/demo/generate", post(handlers::admin::generate_demo))
        .route(
            "/reports/transactions.csv",
            get(handlers::export::transactions_csv),
        )
        .layer(axum_middleware::from_fn_with_state(
            state.config.clone(),
            middleware::auth::admin_auth,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/quote", post(handlers::quotes::create_quote))
        .route(
            "/transactions",
            post(handlers::transactions::create_transaction)
                .get(handlers::transactions::list_transactions),
        )
        .route(
            "/transactions/:id",
            get(handlers::transactions::get_transaction),
        )
        .route(
            "/transactions/:id/proof",
            patch(handlers::transactions::upload_proof),
        )
        .nest("/admin", admin_routes)
        .layer(axum_middleware::from_fn(
            middleware::request_logger::request_logger_middleware,
        ))
        .layer(cors_layer(&state.config))
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    }
}
