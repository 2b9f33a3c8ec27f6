//! Route definitions for the `/wildlife` page tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::{animal, class, home, order, preserve_status};
use crate::state::AppState;

/// Routes mounted at `/wildlife`.
///
/// ```text
/// GET  /                          -> dashboard with aggregate counts
///
/// GET  /{entity}s                 -> list
/// GET  /{entity}/create           -> empty form
/// POST /{entity}/create           -> create submission
/// GET  /{entity}/{id}             -> detail (404 if absent)
/// GET  /{entity}/{id}/update      -> prefilled form (404 if absent)
/// POST /{entity}/{id}/update      -> update submission
/// GET  /{entity}/{id}/delete      -> delete confirmation
/// POST /{entity}/{id}/delete      -> delete submission
/// ```
///
/// The static `create` sub-paths are registered ahead of the `{id}`
/// matchers so they are never shadowed by them.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        // Animal.
        .route(
            "/animal/create",
            get(animal::create_get).post(animal::create_post),
        )
        .route(
            "/animal/{id}/delete",
            get(animal::delete_get).post(animal::delete_post),
        )
        .route(
            "/animal/{id}/update",
            get(animal::update_get).post(animal::update_post),
        )
        .route("/animal/{id}", get(animal::detail))
        .route("/animals", get(animal::list))
        // Class.
        .route(
            "/class/create",
            get(class::create_get).post(class::create_post),
        )
        .route(
            "/class/{id}/delete",
            get(class::delete_get).post(class::delete_post),
        )
        .route(
            "/class/{id}/update",
            get(class::update_get).post(class::update_post),
        )
        .route("/class/{id}", get(class::detail))
        .route("/classes", get(class::list))
        // Order.
        .route(
            "/order/create",
            get(order::create_get).post(order::create_post),
        )
        .route(
            "/order/{id}/delete",
            get(order::delete_get).post(order::delete_post),
        )
        .route(
            "/order/{id}/update",
            get(order::update_get).post(order::update_post),
        )
        .route("/order/{id}", get(order::detail))
        .route("/orders", get(order::list))
        // PreserveStatus.
        .route(
            "/preservestatus/create",
            get(preserve_status::create_get).post(preserve_status::create_post),
        )
        .route(
            "/preservestatus/{id}/delete",
            get(preserve_status::delete_get).post(preserve_status::delete_post),
        )
        .route(
            "/preservestatus/{id}/update",
            get(preserve_status::update_get).post(preserve_status::update_post),
        )
        .route("/preservestatus/{id}", get(preserve_status::detail))
        .route("/preservestatuses", get(preserve_status::list))
}
