use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").unwrap_or_else(|e| panic!("invalid env pattern: {}", e))
});

/// Optional settings file. Every section and field may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub assistant: AssistantSection,
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub storage: StorageSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantSection {
    pub endpoint: Option<String>,
    pub enable_web_search: Option<bool>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSection {
    pub state_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| AppError::ConfigError {
            message: format!(
                "Cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CHAT_ENDPOINT})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.assistant.endpoint {
            validation::validate_url("assistant.endpoint", endpoint)?;
        }
        if let Some(timeout) = self.assistant.timeout_seconds {
            validation::validate_range("assistant.timeout_seconds", timeout, 1, 600)?;
        }
        if let Some(path) = &self.catalog.path {
            validation::validate_path("catalog.path", path)?;
        }
        if let Some(state_dir) = &self.storage.state_dir {
            validation::validate_path("storage.state_dir", state_dir)?;
        }
        Ok(())
    }
}
