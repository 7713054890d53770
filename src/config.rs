use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

const ENV_PREFIX: &str = "PDAGENT_";

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default)]
    pub secret: Option<String>,

    #[serde(default = "default_http_timeout_seconds")]
    pub http_timeout_seconds: u64,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_json: bool,
}

fn default_address() -> String {
    "http://127.0.0.1:49463".to_string()
}

fn default_http_timeout_seconds() -> u64 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Self>(vars)
            .map_err(|e| anyhow!("Invalid {}* environmental variable: {}", ENV_PREFIX, e))
    }

    pub fn send_url(&self) -> String {
        format!("{}/send", self.address.trim_end_matches('/'))
    }
}
