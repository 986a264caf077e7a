use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("invalid {field}: {value} ({reason})")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl BankError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            BankError::InvalidFieldValue { field, .. } => {
                format!("The value supplied for '{}' was rejected", field)
            }
            BankError::IoError(_) => "Could not read the configuration file".to_string(),
            BankError::YamlError(_) | BankError::TomlError(_) => {
                "The configuration file is not well formed".to_string()
            }
            BankError::ConfigError { message } => message.clone(),
            BankError::InvalidConfigValue { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BankError>;
