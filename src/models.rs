//! Data models and structures
//!
//! Defines the form payload received from the browser, the JSON shapes sent
//! back, and the process-wide configuration.

use crate::ai::openai::client::DEFAULT_BASE_URL;
use crate::{Error, Result};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Value shipped in `.env` templates; treated the same as an unset key.
pub const PLACEHOLDER_API_KEY: &str = "add your key";

const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "static";

/// Form fields submitted by the browser client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub faith: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sdg: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// JSON `null` reads the same as an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl GenerationRequest {
    pub fn new(faith: &str, sdg: &str, description: &str) -> Self {
        Self {
            faith: faith.to_string(),
            sdg: sdg.to_string(),
            description: description.to_string(),
        }
    }

    /// Returns a copy with every field trimmed, or `Error::Validation` when
    /// `faith` or `sdg` ends up empty.
    pub fn normalized(&self) -> Result<Self> {
        let faith = self.faith.trim();
        let sdg = self.sdg.trim();

        if faith.is_empty() || sdg.is_empty() {
            return Err(Error::Validation);
        }

        Ok(Self::new(faith, sdg, self.description.trim()))
    }
}

/// Successful response: a hosted image URL or a `data:` URI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationResponse {
    pub url: String,
}

/// Error payload returned to the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<Secret<String>>,
    pub openai_base_url: String,
    pub image_model: String,
    pub provider_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            provider_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let provider_timeout = match lookup("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => match parse_var::<u64>("PROVIDER_TIMEOUT_SECS", &raw)? {
                0 => {
                    return Err(Error::InvalidConfig {
                        name: "PROVIDER_TIMEOUT_SECS",
                        value: raw,
                    })
                }
                secs => Duration::from_secs(secs),
            },
            None => defaults.provider_timeout,
        };

        let port = match lookup("PORT") {
            Some(raw) => parse_var("PORT", &raw)?,
            None => defaults.port,
        };

        Ok(Self {
            openai_api_key: lookup("OPENAI_API_KEY").map(Secret::new),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.openai_base_url),
            image_model: lookup("IMAGE_MODEL").unwrap_or(defaults.image_model),
            provider_timeout,
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    /// The provider credential, unless it is missing, blank, or the placeholder.
    pub fn api_key(&self) -> Option<&Secret<String>> {
        self.openai_api_key.as_ref().filter(|key| {
            let value = key.expose_secret().trim();
            !value.is_empty() && value != PLACEHOLDER_API_KEY
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| Error::InvalidConfig {
        name,
        value: raw.to_string(),
    })
}
