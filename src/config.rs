use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Feed configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    /// Base URL of the meal provider API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Category names removed from every feed surface (case-insensitive)
    #[serde(default = "default_excluded_categories")]
    pub excluded_categories: Vec<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            excluded_categories: default_excluded_categories(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "mealfeed/0.3 (+https://github.com/mealfeed/mealfeed)".to_string()
}

fn default_excluded_categories() -> Vec<String> {
    vec!["beef".to_string()]
}

impl FeedConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALFEED__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALFEED__BASE_URL. List values use a
    /// comma separator: MEALFEED__EXCLUDED_CATEGORIES="beef,pork"
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("MEALFEED")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("excluded_categories"),
            )
            .build()?;

        settings.try_deserialize()
    }
}
