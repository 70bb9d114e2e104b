use eyre::{Result, eyre};

pub const DEFAULT_HUB_URL: &str = "https://api.warpcast.com/v2";

/// Connection settings for the social hub.
///
/// Each `HubClient` owns its credential; nothing is stored globally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Bearer token sent with every request when present
    pub api_key: Option<String>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HUB_URL.to_string(),
            api_key: None,
        }
    }
}

impl HubConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(eyre!("Hub URL must be http(s): {}", base_url));
        }
        Ok(Self { base_url, api_key })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
