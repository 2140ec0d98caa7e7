pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_DATA_FILE: &str = "petdata.dat";
pub const DEFAULT_MIN_BIRTH_YEAR: i32 = 1900;
pub const DEFAULT_MAX_BIRTH_YEAR: i32 = 2023;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "pet-inventory")]
#[command(about = "Interactive inventory of pets and their owners")]
pub struct CliConfig {
    /// Directory holding the data file [default: .]
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Name of the data file inside the data directory [default: petdata.dat]
    #[arg(long)]
    pub data_file: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// Effective settings after layering defaults, the TOML file and flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    pub data_file: String,
    pub min_birth_year: i32,
    pub max_birth_year: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            data_file: DEFAULT_DATA_FILE.to_string(),
            min_birth_year: DEFAULT_MIN_BIRTH_YEAR,
            max_birth_year: DEFAULT_MAX_BIRTH_YEAR,
        }
    }
}

impl Settings {
    pub fn apply_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(dir) = file.data_dir() {
            self.data_dir = dir.to_string();
        }
        if let Some(name) = file.data_file() {
            self.data_file = name.to_string();
        }
        if let Some(min) = file.min_birth_year() {
            self.min_birth_year = min;
        }
        if let Some(max) = file.max_birth_year() {
            self.max_birth_year = max;
        }
        self
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(path) = &cli.config {
            tracing::info!(path = %path, "loading settings file");
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            settings = settings.apply_toml(&file);
        }
        if let Some(dir) = &cli.data_dir {
            settings.data_dir = dir.clone();
        }
        if let Some(name) = &cli.data_file {
            settings.data_file = name.clone();
        }

        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn birth_year_bounds(&self) -> (i32, i32) {
        (self.min_birth_year, self.max_birth_year)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_dir", &self.data_dir)?;
        validation::validate_file_name("data_file", &self.data_file)?;
        validation::validate_range("min_birth_year", self.min_birth_year, 1, 9999)?;
        validation::validate_range(
            "max_birth_year",
            self.max_birth_year,
            self.min_birth_year,
            9999,
        )?;
        Ok(())
    }
}
