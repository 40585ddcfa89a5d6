use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::template::{NotFoundTemplate, Template};

mod health;
mod index;
mod inquiry;

pub use index::{IndexTemplate, ServiceOption};
pub use inquiry::MailtoResponse;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/inquiry", post(inquiry::action))
        .route("/inquiry/mailto", get(inquiry::mailto))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
