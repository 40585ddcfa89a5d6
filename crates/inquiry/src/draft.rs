use serde::{Deserialize, Deserializer};

use crate::{FALLBACK_LABEL, ServiceCategory};

/// Values a visitor entered in the inquiry form.
///
/// Every field is optional on the wire. A missing or unknown `service`
/// key is kept as `None` and renders with the fallback label.
#[derive(Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "lenient_service")]
    pub service: Option<ServiceCategory>,
    pub message: String,
}

impl InquiryDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        service: Option<ServiceCategory>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            service,
            message: message.into(),
        }
    }

    /// Draft shown on a fresh page: empty fields, first service selected.
    pub fn blank() -> Self {
        Self {
            service: Some(ServiceCategory::default()),
            ..Default::default()
        }
    }

    pub fn service_label(&self) -> &'static str {
        self.service
            .map(|service| service.label())
            .unwrap_or(FALLBACK_LABEL)
    }

    pub fn subject(&self, brand_name: &str) -> String {
        format!("Inquiry: {} | {brand_name}", self.service_label())
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nService: {}\n\nMessage:\n{}",
            self.name,
            self.email,
            self.service_label(),
            self.message
        )
    }
}

fn lenient_service<'de, D>(deserializer: D) -> Result<Option<ServiceCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let key = Option::<String>::deserialize(deserializer)?;

    Ok(key.and_then(|key| key.parse().ok()))
}
