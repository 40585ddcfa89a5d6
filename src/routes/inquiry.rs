use axum::{
    Json,
    extract::{Form, Query, State},
    response::IntoResponse,
};
use rcoach_inquiry::{InquiryDraft, compose_mailto};
use serde::Serialize;

use crate::routes::{AppState, IndexTemplate};
use crate::template::Template;

/// POST /inquiry - compose the `mailto:` link and render the page again
/// with the form kept, redirecting the browser to the mail client.
pub async fn action(template: Template, Form(draft): Form<InquiryDraft>) -> impl IntoResponse {
    let config = template.config();
    let href = compose_mailto(&draft, &config.contact.email, &config.brand.name);

    tracing::info!(service = draft.service_label(), "Inquiry composed");

    let page = IndexTemplate::new(config, draft, Some(href));

    template.render(page)
}

#[derive(Serialize, Debug)]
pub struct MailtoResponse {
    pub href: String,
    pub subject: String,
    pub body: String,
}

/// GET /inquiry/mailto - the same composition for scripted clients.
pub async fn mailto(
    State(app_state): State<AppState>,
    Query(draft): Query<InquiryDraft>,
) -> impl IntoResponse {
    let config = &app_state.config;

    Json(MailtoResponse {
        href: compose_mailto(&draft, &config.contact.email, &config.brand.name),
        subject: draft.subject(&config.brand.name),
        body: draft.body(),
    })
}
