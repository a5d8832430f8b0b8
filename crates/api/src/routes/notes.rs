//! Route definitions for the `/notes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET    /                   -> list (?archived=bool, default false)
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PATCH  /{id}               -> update
/// DELETE /{id}               -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list).post(notes::create))
        .route(
            "/{id}",
            get(notes::get_by_id)
                .patch(notes::update)
                .delete(notes::delete),
        )
}
