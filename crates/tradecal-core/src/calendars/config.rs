//! File-based holiday table configuration.
//!
//! A registry configuration names holiday tables and maps exchange codes to
//! them. It is read from TOML, or from JSON when the file extension is
//! `.json`.
//!
//! # TOML Format
//!
//! ```toml
//! default_table = "NSE"
//!
//! [[tables]]
//! name = "NSE"
//! holidays = ["20240126", "20240308"]
//!
//! [exchanges]
//! MCX = "NSE"
//! ```
//!
//! With `include_builtin = true` (the default) the file is layered over the
//! embedded tables: a table with a built-in name adds to that table's
//! holidays, and exchange mappings add to or override the built-in ones.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::tables::NSE_TABLE;
use crate::error::{TradeCalError, TradeCalResult};

/// One named holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Table name, referenced by `default_table` and `exchanges`.
    pub name: String,

    /// Holiday dates in `YYYYMMDD` format.
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl TableConfig {
    /// Create an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: Vec::new(),
        }
    }

    /// Add holiday date strings.
    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.holidays.extend(dates.into_iter().map(Into::into));
        self
    }
}

/// Configuration for a [`CalendarRegistry`](super::CalendarRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Table used for exchanges with no mapping.
    #[serde(default = "default_table")]
    pub default_table: String,

    /// Start from the embedded tables and exchange mappings.
    #[serde(default = "default_true")]
    pub include_builtin: bool,

    /// Holiday tables.
    #[serde(default)]
    pub tables: Vec<TableConfig>,

    /// Exchange code to table name.
    #[serde(default)]
    pub exchanges: BTreeMap<String, String>,
}

fn default_table() -> String {
    NSE_TABLE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_table: default_table(),
            include_builtin: true,
            tables: Vec::new(),
            exchanges: BTreeMap::new(),
        }
    }
}

impl RegistryConfig {
    /// Parse a configuration from TOML.
    pub fn from_toml_str(content: &str) -> TradeCalResult<Self> {
        toml::from_str(content)
            .map_err(|e| TradeCalError::config(format!("Failed to parse TOML: {}", e)))
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(content: &str) -> TradeCalResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| TradeCalError::config(format!("Failed to parse JSON: {}", e)))
    }

    /// Load a configuration file, choosing the format by extension.
    pub fn from_file(path: impl AsRef<Path>) -> TradeCalResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TradeCalError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> TradeCalResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TradeCalError::config(format!("Failed to serialize TOML: {}", e)))
    }

    /// Set the default table.
    pub fn with_default_table(mut self, name: impl Into<String>) -> Self {
        self.default_table = name.into();
        self
    }

    /// Add a table.
    pub fn with_table(mut self, table: TableConfig) -> Self {
        self.tables.push(table);
        self
    }

    /// Map an exchange code to a table.
    pub fn with_exchange(mut self, code: impl Into<String>, table: impl Into<String>) -> Self {
        self.exchanges.insert(code.into(), table.into());
        self
    }

    /// Disable layering over the embedded tables.
    pub fn without_builtin(mut self) -> Self {
        self.include_builtin = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_minimal() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.default_table, "NSE");
        assert!(config.include_builtin);
    }

    #[test]
    fn test_toml_full() {
        let toml = r#"
            default_table = "XNYS"
            include_builtin = false

            [[tables]]
            name = "XNYS"
            holidays = ["20250101", "20250704"]

            [exchanges]
            NYSE = "XNYS"
        "#;

        let config = RegistryConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.default_table, "XNYS");
        assert!(!config.include_builtin);
        assert_eq!(config.tables.len(), 1);
        assert_eq!(config.tables[0].holidays.len(), 2);
        assert_eq!(config.exchanges.get("NYSE").map(String::as_str), Some("XNYS"));
    }

    #[test]
    fn test_json() {
        let json = r#"{
            "tables": [{"name": "NSE", "holidays": ["20240126"]}],
            "exchanges": {"MCX": "NSE"}
        }"#;

        let config = RegistryConfig::from_json_str(json).unwrap();
        assert_eq!(config.default_table, "NSE");
        assert_eq!(config.tables[0].holidays, vec!["20240126".to_string()]);
    }

    #[test]
    fn test_parse_errors_are_config_errors() {
        let err = RegistryConfig::from_toml_str("tables = 3").unwrap_err();
        assert!(matches!(err, TradeCalError::ConfigError { .. }));

        let err = RegistryConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, TradeCalError::ConfigError { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = RegistryConfig::from_file("/nonexistent/holidays.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RegistryConfig::default()
            .with_table(TableConfig::new("NSE").with_holidays(["20240126"]))
            .with_exchange("MCX", "NSE");

        let toml = config.to_toml_string().unwrap();
        assert_eq!(RegistryConfig::from_toml_str(&toml).unwrap(), config);
    }
}
