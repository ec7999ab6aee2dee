use std::time::Duration;

pub const API_URL_ENV: &str = "API_URL";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Base URL of the ranking API, without the `/api/players` path
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            user_agent: "BeachRanking/1.0",
            timeout_secs: 30,
        }
    }
}

impl ApiSettings {
    /// Read the base URL from the environment. A missing value is kept empty
    /// and surfaces later as fetch failures.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_default();

        Self {
            base_url,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryOptions {
    pub stale_time: Duration,
    pub retry: u32,
    pub retry_base_delay: Duration,
    pub retry_max_delay: Duration,
    pub refetch_on_focus: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(60),
            retry: 2,
            retry_base_delay: Duration::from_millis(1000),
            retry_max_delay: Duration::from_secs(30),
            refetch_on_focus: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutSettings {
    pub wide_breakpoint_px: u32,
    pub pagination_threshold: usize,
    pub row_height_px: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            wide_breakpoint_px: 975,
            pagination_threshold: 10,
            row_height_px: 53,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub query: QueryOptions,
    pub layout: LayoutSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::from_env(),
            query: QueryOptions::default(),
            layout: LayoutSettings::default(),
        }
    }
}
