use std::time::Duration;

use axum::{
    http::{header, Method},
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        items::{
            create_item, delete_item, get_item, list_expiring_items, list_items, toggle_opened,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // Item routes with CORS
    let item_routes = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/expiring", get(list_expiring_items))
        .route("/items/{id}", get(get_item).delete(delete_item))
        .route("/items/{id}/toggle-opened", patch(toggle_opened))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .merge(item_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .with_state(state)
}
