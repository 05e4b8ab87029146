#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str = "https://loreal-chatbot.tran-h10.workers.dev/";
pub const DEFAULT_PRODUCTS_PATH: &str = "products.json";
pub const DEFAULT_STATE_DIR: &str = ".routine-picker";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_endpoint: Option<String>,
    pub products_path: Option<String>,
    pub state_dir: Option<String>,
    pub disable_web_search: bool,
    pub timeout_seconds: Option<u64>,
}

/// Fully resolved settings: command line, then config file, then defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_endpoint: String,
    pub products_path: String,
    pub state_dir: String,
    pub enable_web_search: bool,
    pub timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(TomlConfig::default(), Overrides::default())
    }
}

impl Settings {
    pub fn resolve(file: TomlConfig, overrides: Overrides) -> Self {
        Self {
            api_endpoint: overrides
                .api_endpoint
                .or(file.assistant.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            products_path: overrides
                .products_path
                .or(file.catalog.path)
                .unwrap_or_else(|| DEFAULT_PRODUCTS_PATH.to_string()),
            state_dir: overrides
                .state_dir
                .or(file.storage.state_dir)
                .unwrap_or_else(|| DEFAULT_STATE_DIR.to_string()),
            enable_web_search: !overrides.disable_web_search
                && file.assistant.enable_web_search.unwrap_or(true),
            timeout_seconds: overrides
                .timeout_seconds
                .or(file.assistant.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn products_path(&self) -> &str {
        &self.products_path
    }

    fn state_dir(&self) -> &str {
        &self.state_dir
    }

    fn web_search_enabled(&self) -> bool {
        self.enable_web_search
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("products_path", &self.products_path)?;
        validation::validate_file_extensions("products_path", &[self.products_path.as_str()], &["json"])?;
        validation::validate_non_empty_string("state_dir", &self.state_dir)?;
        validation::validate_path("state_dir", &self.state_dir)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;
        Ok(())
    }
}
