//! Configuration management for the visitor log server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the hosted record store.
///
/// Both fields are required: the server cannot do anything useful
/// without them, so a missing value is a startup failure rather than a
/// per-request error.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Base URL of the hosted data/auth service
    pub url: String,
    /// Public API key sent with every request
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Settings for the public check-in form
#[derive(Debug, Deserialize, Clone)]
pub struct FormConfig {
    /// College picklist offered on the form
    #[serde(default = "FormConfig::default_colleges")]
    pub colleges: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub form: FormConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix VISITLOG_)
            .add_source(
                Environment::with_prefix("VISITLOG")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override store endpoint from STORE_URL env var if present
            .set_override_option("store.url", env::var("STORE_URL").ok())?
            // Override API key from STORE_API_KEY env var if present
            .set_override_option("store.api_key", env::var("STORE_API_KEY").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            colleges: Self::default_colleges(),
        }
    }
}

impl FormConfig {
    fn default_colleges() -> Vec<String> {
        [
            "Symbiosis Institute of Media & Communication (SIMC)",
            "Symbiosis Institute of Business Management (SIBM)",
            "Symbiosis Institute of Digital and Telecom Management (SIDTM)",
            "Symbiosis Institute of Technology (SIT)",
            "Symbiosis School of Banking and Finance (SSBF)",
            "Symbiosis School of Biological Sciences (SSBS)",
            "Symbiosis School of Visual Arts and Photography (SSVAP)",
            "Symbiosis School of Culinary Arts and Nutritional Sciences (SSCANs)",
            "Symbiosis College of Nursing (SCON)",
            "Symbiosis School of Online and Digital Learning (SSODL)",
            "Symbiosis Centre for Health Skills (SCHS)",
            "Symbiosis School of Sports Sciences (SSSS)",
            "Symbiosis Institute of Health Sciences (SIHS)",
            "Symbiosis Medical College for Women (SMCW)",
            "Symbiosis Artificial Intelligence Institute (SAII)",
            "Symbiosis College of Physiotherapy",
            "Symbiosis Community Outreach Programme & Extension (SCOPE)",
            "Symbiosis Centre for Entrepreneurship and Innovation (SCEI)",
            "Symbiosis Centre for Research and Innovation (SCRI)",
            "Symbiosis Teaching Learning Resource Centre (STLRC)",
            "Symbiosis University Hospital and Research Centre (SUHRC)",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}
