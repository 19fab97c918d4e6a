//! Configuration for inspection runs

use crate::classifier::{DEFAULT_SEQUENCE_KEYWORDS, DEFAULT_VEHICLE_KEYWORDS, Vocabulary};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Number of data rows previewed per sheet unless configured otherwise
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub sheets: HashMap<String, SheetConfig>,
}

impl ScoutConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ScoutConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Reject settings that would make the report meaningless
    pub fn validate(&self) -> Result<()> {
        if self.global.preview_rows == Some(0) {
            anyhow::bail!("Configuration error: preview_rows must be at least 1");
        }
        check_keywords(&self.global.vehicle_keywords, "vehicle_keywords", None)?;
        check_keywords(&self.global.sequence_keywords, "sequence_keywords", None)?;

        for (sheet_name, sheet) in &self.sheets {
            check_keywords(&sheet.vehicle_keywords, "vehicle_keywords", Some(sheet_name))?;
            check_keywords(&sheet.sequence_keywords, "sequence_keywords", Some(sheet_name))?;
        }

        Ok(())
    }

    pub fn preview_rows(&self) -> usize {
        self.global.preview_rows.unwrap_or(DEFAULT_PREVIEW_ROWS)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.global.log_level.as_deref()
    }

    /// Vocabulary for a sheet with fallback chain: sheet -> global -> built-in
    pub fn vocabulary_for(&self, sheet_name: &str) -> Vocabulary {
        let sheet = self.sheets.get(sheet_name);

        let vehicle = sheet
            .and_then(|s| s.vehicle_keywords.as_deref())
            .or(self.global.vehicle_keywords.as_deref());
        let sequence = sheet
            .and_then(|s| s.sequence_keywords.as_deref())
            .or(self.global.sequence_keywords.as_deref());

        match (vehicle, sequence) {
            (Some(v), Some(s)) => Vocabulary::new(v, s),
            (Some(v), None) => Vocabulary::new(v, DEFAULT_SEQUENCE_KEYWORDS),
            (None, Some(s)) => Vocabulary::new(DEFAULT_VEHICLE_KEYWORDS, s),
            (None, None) => Vocabulary::default(),
        }
    }
}

fn check_keywords(keywords: &Option<Vec<String>>, key: &str, sheet: Option<&String>) -> Result<()> {
    let Some(keywords) = keywords else {
        return Ok(());
    };
    let scope = match sheet {
        Some(name) => format!("sheet '{}'", name),
        None => "global".to_string(),
    };
    if keywords.is_empty() {
        anyhow::bail!("Configuration error: {} {} is empty", scope, key);
    }
    if keywords.iter().any(|k| k.trim().is_empty()) {
        anyhow::bail!("Configuration error: {} {} contains a blank keyword", scope, key);
    }
    Ok(())
}

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Rows to preview per sheet
    #[serde(default)]
    pub preview_rows: Option<usize>,
    /// Default tracing filter when RUST_LOG is unset
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub vehicle_keywords: Option<Vec<String>>,
    #[serde(default)]
    pub sequence_keywords: Option<Vec<String>>,
}

/// Sheet-specific overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetConfig {
    #[serde(default)]
    pub vehicle_keywords: Option<Vec<String>>,
    #[serde(default)]
    pub sequence_keywords: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScoutConfig::default();
        assert_eq!(config.preview_rows(), DEFAULT_PREVIEW_ROWS);
        assert_eq!(config.log_level(), None);
        assert_eq!(config.vocabulary_for("Sheet1"), Vocabulary::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config = ScoutConfig::from_toml(
            r#"
            [global]
            preview_rows = 10
            log_level = "debug"
            vehicle_keywords = ["Wagon"]

            [sheets."Faults"]
            sequence_keywords = ["Pos"]
            "#,
        )
        .unwrap();

        assert_eq!(config.preview_rows(), 10);
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_vocabulary_fallback_chain() {
        let config = ScoutConfig::from_toml(
            r#"
            [global]
            vehicle_keywords = ["wagon"]

            [sheets."Faults"]
            vehicle_keywords = ["coach"]
            sequence_keywords = ["pos"]
            "#,
        )
        .unwrap();

        // Sheet override wins
        let faults = config.vocabulary_for("Faults");
        assert_eq!(faults.vehicle(), ["coach"]);
        assert_eq!(faults.sequence(), ["pos"]);

        // Global then built-in
        let other = config.vocabulary_for("Info");
        assert_eq!(other.vehicle(), ["wagon"]);
        assert_eq!(other.sequence(), Vocabulary::default().sequence());
    }

    #[test]
    fn test_validation() {
        let mut config = ScoutConfig::default();
        config.global.preview_rows = Some(0);
        assert!(config.validate().is_err());

        let mut config = ScoutConfig::default();
        config.global.vehicle_keywords = Some(vec![]);
        assert!(config.validate().is_err());

        let mut config = ScoutConfig::default();
        config.sheets.insert(
            "Sheet1".to_string(),
            SheetConfig {
                vehicle_keywords: None,
                sequence_keywords: Some(vec!["  ".to_string()]),
            },
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Sheet1"));

        // One blank entry is enough to reject the list
        let config = ScoutConfig::from_toml(
            r#"
            [global]
            vehicle_keywords = ["wagon", " "]
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("blank keyword"));
    }

    #[test]
    fn test_unknown_toml_is_error() {
        assert!(ScoutConfig::from_toml("[global]\npreview_rows = \"five\"").is_err());
    }
}
