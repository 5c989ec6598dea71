//! Runtime configuration.

use std::str::FromStr;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/";

/// Which view the login gate opens onto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Variant {
    /// The employee-onboarding dashboard.
    #[default]
    Dashboard,
    /// The ingredient-to-recipe generator.
    Recipes,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the recipe service.
    pub api_base: Url,
    pub variant: Variant,
}

impl AppConfig {
    pub fn new(api_base: &str, variant: Variant) -> Result<Self, ConfigError> {
        let api_base = Url::from_str(api_base).map_err(|e| ConfigError::InvalidValue {
            key: "api_base".to_string(),
            message: e.to_string(),
        })?;
        if api_base.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                key: "api_base".to_string(),
                message: format!("{api_base} cannot be used as a base URL"),
            });
        }
        Ok(Self { api_base, variant })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            variant: Variant::default(),
        }
    }
}
