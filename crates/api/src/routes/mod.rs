pub mod admin;
pub mod health;
pub mod item;
pub mod location;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                 list (?q= substring filter), create
/// /items/{id}            get, update (PATCH), delete
///
/// /locations             list (with item counts), create
/// /locations/{id}        rename (PATCH), delete
///
/// /admin/reset           full destructive reset (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", item::router())
        .nest("/locations", location::router())
        .nest("/admin", admin::router())
}
