use axum::{extract::Query, response::IntoResponse};
use rcoach_inquiry::{InquiryDraft, ServiceCategory};
use strum::VariantArray;

use crate::config::{BrandConfig, Config, ContactConfig};
use crate::content::{
    DELIVERABLES, FAQS, Faq, NAV_LINKS, NavLink, PACKAGES, Package, SERVICES, STEPS, Service,
    Step, TESTIMONIALS, TRUST, Testimonial, TrustPoint, WORK_WITH,
};
use crate::template::Template;

pub struct ServiceOption {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub brand: BrandConfig,
    pub contact: ContactConfig,
    pub booking_url: String,
    pub nav_links: &'static [NavLink],
    pub services: &'static [Service],
    pub packages: &'static [Package],
    pub trust: &'static [TrustPoint],
    pub steps: &'static [Step],
    pub work_with: &'static [&'static str],
    pub deliverables: &'static [&'static str],
    pub testimonials: &'static [Testimonial],
    pub faqs: &'static [Faq],
    pub options: Vec<ServiceOption>,
    pub draft: InquiryDraft,
    /// Set once the visitor submitted the form.
    pub mailto: Option<String>,
    pub year: i32,
}

impl IndexTemplate {
    pub fn new(config: &Config, draft: InquiryDraft, mailto: Option<String>) -> Self {
        let options = ServiceCategory::VARIANTS
            .iter()
            .map(|category| ServiceOption {
                key: category.as_ref(),
                label: category.option_label(),
                selected: draft.service == Some(*category),
            })
            .collect();

        Self {
            brand: config.brand.clone(),
            contact: config.contact.clone(),
            booking_url: config.booking.url.clone(),
            nav_links: NAV_LINKS,
            services: SERVICES,
            packages: PACKAGES,
            trust: TRUST,
            steps: STEPS,
            work_with: WORK_WITH,
            deliverables: DELIVERABLES,
            testimonials: TESTIMONIALS,
            faqs: FAQS,
            options,
            draft,
            mailto,
            year: time::OffsetDateTime::now_utc().year(),
        }
    }
}

/// GET / - the landing page. A `service` query parameter preselects the
/// service in the inquiry forms.
pub async fn page(template: Template, Query(mut draft): Query<InquiryDraft>) -> impl IntoResponse {
    if draft.service.is_none() {
        draft.service = Some(ServiceCategory::default());
    }

    let page = IndexTemplate::new(template.config(), draft, None);

    template.render(page)
}
