use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, borrow_item, create_item, create_member, get_item_by_id, get_member_by_id,
    library_summary, list_borrowed_items, list_items, return_item,
};

/// Creates the API router with all catalog endpoints
///
/// Command endpoints (Write operations):
/// - POST /items - Register an item
/// - POST /members - Register a member
/// - POST /loans - Borrow an item
/// - POST /returns - Return an item
///
/// Query endpoints (Read operations):
/// - GET /items - List items in catalog order
/// - GET /items/:id - Get item details
/// - GET /members/:id - Get member details
/// - GET /members/:id/items - Detail lines of the member's borrowed items
/// - GET /summary - Plain-text library summary
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/items", get(list_items).post(create_item))
        .route("/members", post(create_member))
        .route("/loans", post(borrow_item))
        .route("/returns", post(return_item))
        // Query endpoints (Read operations)
        .route("/items/:id", get(get_item_by_id))
        .route("/members/:id", get(get_member_by_id))
        .route("/members/:id/items", get(list_borrowed_items))
        .route("/summary", get(library_summary))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
