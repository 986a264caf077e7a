pub mod file_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bank-system")]
#[command(about = "Bank entity core: loads configuration and bootstraps storage")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, help = "Log output format")]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        file_config::ConfigFormat::from_path(&self.config).map(|_| ())
    }
}
