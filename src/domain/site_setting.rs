// src/domain/site_setting.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SettingKey(String);

impl SettingKey {
    pub const MAX_LEN: usize = 50;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() || value.len() > Self::MAX_LEN {
            return Err(DomainError::Validation(format!(
                "setting key must be between 1 and {} characters",
                Self::MAX_LEN
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        {
            return Err(DomainError::Validation(format!(
                "setting key '{value}' may only contain letters, digits, '_', '.' and '-'"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingType {
    Text,
    Image,
    Json,
    Boolean,
}

impl SettingType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Json => "json",
            Self::Boolean => "boolean",
        }
    }

    /// Checks `raw` against the type and returns the form that gets stored.
    pub fn normalize_value(self, raw: &str) -> DomainResult<String> {
        match self {
            Self::Text | Self::Image => Ok(raw.to_string()),
            Self::Json => serde_json::from_str::<serde_json::Value>(raw)
                .map(|_| raw.to_string())
                .map_err(|err| {
                    DomainError::Validation(format!("setting value is not valid JSON: {err}"))
                }),
            Self::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => Ok("1".into()),
                "0" | "false" => Ok("0".into()),
                other => Err(DomainError::Validation(format!(
                    "'{other}' is not a boolean setting value"
                ))),
            },
        }
    }

    /// Stored value rendered according to the type.
    pub fn typed_value(self, stored: &str) -> serde_json::Value {
        match self {
            Self::Text | Self::Image => serde_json::Value::String(stored.to_string()),
            Self::Json => serde_json::from_str(stored)
                .unwrap_or_else(|_| serde_json::Value::String(stored.to_string())),
            Self::Boolean => serde_json::Value::Bool(stored == "1"),
        }
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "json" => Ok(Self::Json),
            "boolean" => Ok(Self::Boolean),
            other => Err(DomainError::Validation(format!(
                "unknown setting type '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteSetting {
    pub id: i64,
    pub key: SettingKey,
    pub value: String,
    pub setting_type: SettingType,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSiteSetting {
    pub key: SettingKey,
    pub value: String,
    pub setting_type: SettingType,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SiteSettingChanges {
    pub value: Option<String>,
    pub setting_type: Option<SettingType>,
    pub description: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait SiteSettingRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<SiteSetting>>;
    async fn find_by_key(&self, key: &SettingKey) -> DomainResult<Option<SiteSetting>>;
    async fn insert(&self, setting: NewSiteSetting) -> DomainResult<SiteSetting>;
    async fn update(
        &self,
        key: &SettingKey,
        changes: SiteSettingChanges,
    ) -> DomainResult<SiteSetting>;
    async fn delete(&self, key: &SettingKey) -> DomainResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_values_are_canonicalised() {
        assert_eq!(SettingType::Boolean.normalize_value("TRUE").unwrap(), "1");
        assert_eq!(SettingType::Boolean.normalize_value("0").unwrap(), "0");
        assert!(SettingType::Boolean.normalize_value("yes please").is_err());
        assert_eq!(
            SettingType::Boolean.typed_value("1"),
            serde_json::Value::Bool(true)
        );
    }

    #[test]
    fn json_values_must_parse() {
        assert!(SettingType::Json.normalize_value("{\"a\":1}").is_ok());
        assert!(SettingType::Json.normalize_value("{oops").is_err());
        assert_eq!(
            SettingType::Json.typed_value("[1,2]"),
            serde_json::json!([1, 2])
        );
    }

    #[test]
    fn keys_reject_spaces() {
        assert!(SettingKey::new("site.title").is_ok());
        assert!(SettingKey::new("site title").is_err());
        assert!(SettingKey::new("").is_err());
    }
}
