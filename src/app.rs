use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::services::ServeDir;

pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(state.static_dir.as_path());
    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/services", get(handlers::services))
        .route("/projects", get(handlers::projects))
        .route("/contact", get(handlers::contact).post(handlers::submit_contact))
        .route("/contact/success", get(handlers::contact_success))
        .nest_service("/static", assets)
        .with_state(state)
}
