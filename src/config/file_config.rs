use crate::utils::error::{BankError, Result};
use std::collections::BTreeMap;
use std::path::Path;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["yaml", "yml", "toml"];

/// Untyped key/value configuration, values kept verbatim. Nothing in the entity core reads it yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileConfig {
    entries: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(BankError::ConfigError {
                message: format!(
                    "Unsupported configuration file {}. Expected one of: {}",
                    path.display(),
                    SUPPORTED_EXTENSIONS.join(", ")
                ),
            }),
        }
    }
}

impl FileConfig {
    /// 從檔案載入配置，依副檔名決定格式
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let format = ConfigFormat::from_path(&path)?;
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded configuration from {}", path.as_ref().display());
        Self::from_str_with_format(&content, format)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, ConfigFormat::Yaml)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, ConfigFormat::Toml)
    }

    fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self> {
        let entries = match format {
            // 空的 YAML 文件解析成 null，視為沒有任何設定
            ConfigFormat::Yaml if content.trim().is_empty() => BTreeMap::new(),
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    /// Pairs in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn log_entries(&self) {
        tracing::info!("Configuration has {} entries", self.len());
        for (key, value) in self.entries() {
            tracing::info!("{} -> {}", key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_yaml_mapping() {
        let yaml = r#"
database:
  host: localhost
  port: 5432
currency: IDR
debug: true
"#;
        let config = FileConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.len(), 3);
        assert_eq!(config.get("currency").unwrap(), "IDR");
        assert_eq!(config.get("database").unwrap()["port"], 5432);
        let keys: Vec<&str> = config.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["currency", "database", "debug"]);
    }

    #[test]
    fn test_parse_toml_table() {
        let toml_content = r#"
currency = "IDR"

[database]
host = "localhost"
"#;
        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.get("database").unwrap()["host"], "localhost");
    }

    #[test]
    fn test_empty_yaml_is_empty_config() {
        let config = FileConfig::from_yaml_str("").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_yaml_sequence_is_rejected() {
        assert!(matches!(
            FileConfig::from_yaml_str("- a\n- b\n"),
            Err(BankError::YamlError(_))
        ));
    }

    #[test]
    fn test_placeholders_are_kept_verbatim() {
        std::env::set_var("BANK_SYSTEM_TEST_DB_URL", "postgres://admin:secret@db/bank");

        let config = FileConfig::from_yaml_str("url: ${BANK_SYSTEM_TEST_DB_URL}\n").unwrap();
        assert_eq!(config.get("url").unwrap(), "${BANK_SYSTEM_TEST_DB_URL}");
        let logged: Vec<String> = config.entries().map(|(_, v)| v.to_string()).collect();
        assert!(logged.iter().all(|v| !v.contains("secret")));

        std::env::remove_var("BANK_SYSTEM_TEST_DB_URL");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::with_suffix(".yaml").unwrap();
        temp_file.write_all(b"name: bank-system\n").unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.get("name").unwrap(), "bank-system");
    }

    #[test]
    fn test_unknown_extension_is_config_error() {
        assert!(matches!(
            FileConfig::from_file("settings.ini"),
            Err(BankError::ConfigError { .. })
        ));
    }
}
