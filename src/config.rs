use std::env;

use serde::{Deserialize, Serialize};

use crate::error::TpResult;

pub static ALPHA_API_DEFAULT: &str = "https://www.alphavantage.co";

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub alpha_api: String,
    pub alpha_api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha_api: ALPHA_API_DEFAULT.to_string(),
            alpha_api_key: String::new(),
        }
    }
}

impl Config {
    /// Stored config first, then ALPHA_API/ALPHA_API_KEY environment overrides
    pub fn load() -> TpResult<Self> {
        let mut config: Config = confy::load(env!("CARGO_PKG_NAME"), None)?;

        if let Ok(alpha_api) = env::var("ALPHA_API") {
            if !alpha_api.is_empty() {
                config.alpha_api = alpha_api;
            }
        }

        if let Ok(alpha_api_key) = env::var("ALPHA_API_KEY") {
            if !alpha_api_key.is_empty() {
                config.alpha_api_key = alpha_api_key;
            }
        }

        Ok(config)
    }

    pub fn store(&self) -> TpResult<()> {
        confy::store(env!("CARGO_PKG_NAME"), None, self).map_err(Into::into)
    }
}
