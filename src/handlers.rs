use crate::chart::write_chart;
use crate::errors::AppError;
use crate::models::Submission;
use crate::projects::load_projects;
use crate::state::AppState;
use crate::ui;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use tracing::error;

pub async fn home() -> Html<String> {
    Html(ui::render_home())
}

pub async fn about() -> Html<String> {
    Html(ui::render_about())
}

pub async fn services() -> Html<String> {
    Html(ui::render_services())
}

/// Rewrites the chart image on every view, then renders the listing.
pub async fn projects(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    if let Err(err) = write_chart(&state.static_dir).await {
        error!("failed to write completion chart: {}", err.message);
        return Err(err);
    }
    let (completed, ongoing) = load_projects();
    Ok(Html(ui::render_projects(completed, ongoing)))
}

pub async fn contact() -> Html<String> {
    Html(ui::render_contact(false))
}

pub async fn contact_success() -> Html<String> {
    Html(ui::render_contact(true))
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Form(submission): Form<Submission>,
) -> Result<Redirect, AppError> {
    state.submissions.record(&submission).await?;
    Ok(Redirect::to("/contact/success"))
}
