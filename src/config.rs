use log::LevelFilter;

pub const DEFAULT_DATA_URL: &str = "/data.json";

/// Settings baked in at build time through `PROJECT_DATA_URL` and `PROJECT_LOG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(option_env!("PROJECT_DATA_URL"), option_env!("PROJECT_LOG"))
    }
}

impl AppConfig {
    pub fn from_values(data_url: Option<&str>, log_level: Option<&str>) -> Self {
        let data_url = data_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_DATA_URL)
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self { data_url, log_level }
    }
}
