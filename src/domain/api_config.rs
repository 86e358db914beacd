use url::Url;

/// Connection settings for the Transifex API.
#[derive(Debug, Clone)]
pub struct TransifexApiConfig {
    /// API base URL.
    pub api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TransifexApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://www.transifex.com").expect("default API URL is valid")
}

fn default_timeout() -> u64 {
    30
}
