use config::{Config as ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::env;
use validator::Validate;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub brand: BrandConfig,
    pub contact: ContactConfig,
    pub booking: BookingConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct BrandConfig {
    #[validate(length(min = 1))]
    pub name: String,
    pub tagline: String,
    pub short_blurb: String,
    pub accent: String,
}

/// Where inquiries go. `email` is also the `mailto:` recipient.
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ContactConfig {
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct BookingConfig {
    #[validate(url)]
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (RCOACH__CONTACT__EMAIL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, AppError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("brand.name", "[Your Name] Research Coaching")?
            .set_default(
                "brand.tagline",
                "From idea to publication — guided, ethical, and results-driven research support.",
            )?
            .set_default(
                "brand.short_blurb",
                "I help students, professionals, and academics design strong studies, write winning proposals, and analyze qualitative and quantitative data with confidence.",
            )?
            .set_default("brand.accent", "Evidence. Clarity. Impact.")?
            .set_default("contact.email", "you@example.com")?
            .set_default("contact.phone", "+264 00 000 0000")?
            .set_default("contact.location", "Windhoek, Namibia (Remote worldwide)")?
            .set_default("booking.url", "https://calendly.com/your-link")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, the defaults above are enough to serve the page
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("RCOACH")
                .separator("__")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.brand.validate()?;
        self.contact.validate()?;
        self.booking.validate()?;

        if self.server.port == 0 {
            return Err(AppError::InvalidConfig(
                "Server port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
