use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::config::Config;
use crate::error::AppError;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Per-request renderer. Carries the site configuration so handlers can
/// build views without reaching into the state themselves.
pub struct Template {
    config: Config,
}

impl Template {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => AppError::from(err).into_response(),
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            config: state.config.clone(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;
