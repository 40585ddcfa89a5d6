use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Label used when a service key does not name any known category.
pub const FALLBACK_LABEL: &str = "Research Support";

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    AsRefStr,
)]
pub enum ServiceCategory {
    #[default]
    #[serde(rename = "proposal")]
    #[strum(to_string = "proposal")]
    Proposal,
    #[serde(rename = "full", alias = "full-project-support")]
    #[strum(to_string = "full", serialize = "full-project-support")]
    FullProjectSupport,
    #[serde(rename = "qual", alias = "qualitative-analysis")]
    #[strum(to_string = "qual", serialize = "qualitative-analysis")]
    QualitativeAnalysis,
    #[serde(rename = "quant", alias = "quantitative-analysis")]
    #[strum(to_string = "quant", serialize = "quantitative-analysis")]
    QuantitativeAnalysis,
}

impl ServiceCategory {
    /// Human readable label used in the inquiry subject and body.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Proposal => "Proposal / Concept Development",
            ServiceCategory::FullProjectSupport => "Full Project Support",
            ServiceCategory::QualitativeAnalysis => "Qualitative Data Analysis",
            ServiceCategory::QuantitativeAnalysis => "Quantitative Data Analysis",
        }
    }

    /// Shorter text shown in the service picker.
    pub fn option_label(&self) -> &'static str {
        match self {
            ServiceCategory::Proposal => "Proposal / concept",
            ServiceCategory::FullProjectSupport => "Full project support",
            ServiceCategory::QualitativeAnalysis => "Qualitative analysis",
            ServiceCategory::QuantitativeAnalysis => "Quantitative analysis",
        }
    }
}

/// Resolve a raw service key, as posted by a form, to its label.
pub fn service_label(key: &str) -> &'static str {
    key.parse::<ServiceCategory>()
        .map(|category| category.label())
        .unwrap_or(FALLBACK_LABEL)
}
