use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every key may be omitted.
///
/// ```toml
/// [store]
/// data_dir = "${HOME}/.pets"
/// data_file = "petdata.dat"
///
/// [input]
/// min_birth_year = 1900
/// max_birth_year = 2023
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub store: Option<StoreConfig>,
    pub input: Option<InputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    pub data_dir: Option<String>,
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub min_birth_year: Option<i32>,
    pub max_birth_year: Option<i32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InventoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InventoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，未定義的保持原樣
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

    pub fn data_dir(&self) -> Option<&str> {
        self.store.as_ref().and_then(|s| s.data_dir.as_deref())
    }

    pub fn data_file(&self) -> Option<&str> {
        self.store.as_ref().and_then(|s| s.data_file.as_deref())
    }

    pub fn min_birth_year(&self) -> Option<i32> {
        self.input.as_ref().and_then(|i| i.min_birth_year)
    }

    pub fn max_birth_year(&self) -> Option<i32> {
        self.input.as_ref().and_then(|i| i.max_birth_year)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = self.data_dir() {
            validation::validate_path("store.data_dir", dir)?;
        }
        if let Some(file) = self.data_file() {
            validation::validate_file_name("store.data_file", file)?;
        }
        if let (Some(min), Some(max)) = (self.min_birth_year(), self.max_birth_year()) {
            if min > max {
                return Err(InventoryError::ConfigValidationError {
                    field: "input.min_birth_year".to_string(),
                    message: format!("{} is after max_birth_year {}", min, max),
                });
            }
        }
        Ok(())
    }
}
