use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HarvestError;

/// Configuration for a harvest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// URL of the page to pull image links from.
    pub start_url: String,

    /// Output directory; derived from the page URL when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    /// CSS class of the main content element to constrain the search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// HTML id of the main content element to constrain the search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Tag types to scan for image links.
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,

    /// Maximum number of downloads in flight at once.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_tags() -> Vec<String> {
    vec!["a".to_string(), "img".to_string()]
}

fn default_max_concurrency() -> usize {
    4
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64; rv:75.0) Gecko/20100101 Firefox/75.0".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl HarvestConfig {
    /// Create a new configuration with default values.
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            out_dir: None,
            class: None,
            id: None,
            tags: default_tags(),
            max_concurrency: default_max_concurrency(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HarvestError> {
        let contents = fs::read_to_string(path).map_err(HarvestError::ConfigRead)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
