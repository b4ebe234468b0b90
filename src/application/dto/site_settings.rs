// src/application/dto/site_settings.rs
use crate::domain::site_setting::SiteSetting;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteSettingDto {
    pub id: i64,
    pub setting_key: String,
    pub setting_value: String,
    pub setting_type: String,
    pub description: Option<String>,
    /// `setting_value` decoded according to `setting_type`.
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteSetting> for SiteSettingDto {
    fn from(setting: SiteSetting) -> Self {
        let value = setting.setting_type.typed_value(&setting.value);
        Self {
            id: setting.id,
            setting_key: setting.key.to_string(),
            setting_value: setting.value,
            setting_type: setting.setting_type.to_string(),
            description: setting.description,
            value,
            updated_at: setting.updated_at,
        }
    }
}
