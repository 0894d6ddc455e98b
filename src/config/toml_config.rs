use crate::config::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_INVENTORY_PATH};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub inventory: InventoryConfig,
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default = "default_inventory_path")]
    pub path: String,
    pub persist_on_add: Option<bool>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: default_inventory_path(),
            persist_on_add: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

fn default_inventory_path() -> String {
    DEFAULT_INVENTORY_PATH.to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| InventoryError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InventoryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INVENTORY_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InventoryError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(file) = &cli.file {
            tracing::debug!("Inventory path overridden to: {}", file);
            self.inventory.path = file.clone();
        }
        if cli.persist_on_add {
            self.inventory.persist_on_add = Some(true);
        }
        if let Some(symbol) = &cli.currency {
            self.display = Some(DisplayConfig {
                currency_symbol: Some(symbol.clone()),
            });
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn inventory_path(&self) -> &str {
        &self.inventory.path
    }

    fn currency_symbol(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.currency_symbol.as_deref())
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    fn persist_on_add(&self) -> bool {
        self.inventory.persist_on_add.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("inventory.path", &self.inventory.path)?;
        validate_non_empty_string("display.currency_symbol", self.currency_symbol())?;
        Ok(())
    }
}
