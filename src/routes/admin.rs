use crate::handlers::admin::{create, delete, edit_form, index, new_form, table, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

/// HTML admin under /admin.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(index))
        .route("/admin/", get(index))
        .route("/admin/:view", get(table))
        .route("/admin/:view/new", get(new_form).post(create))
        .route("/admin/:view/:id/edit", get(edit_form).post(update))
        .route("/admin/:view/:id/delete", post(delete))
}
