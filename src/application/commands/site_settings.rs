// src/application/commands/site_settings.rs
use std::sync::Arc;

use super::{on_field, patch};
use crate::{
    application::{
        dto::SiteSettingDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::media::{MediaLibrary, MediaNamespace, UploadedFile},
        validation::FieldErrors,
    },
    domain::site_setting::{
        NewSiteSetting, SettingKey, SettingType, SiteSetting, SiteSettingChanges,
        SiteSettingRepository,
    },
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateSiteSettingCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 50,
        message = "The setting key field is required and may not be greater than 50 characters."
    ))]
    pub setting_key: String,
    /// Strings are stored as given; other JSON values are stored as their JSON text.
    #[schema(value_type = Object)]
    pub setting_value: Option<Value>,
    #[serde(default)]
    #[validate(length(min = 1, message = "The setting type field is required."))]
    pub setting_type: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateSiteSettingCommand {
    #[schema(value_type = Object)]
    pub setting_value: Option<Value>,
    pub setting_type: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

pub struct SiteSettingCommandService {
    repo: Arc<dyn SiteSettingRepository>,
    media: Arc<MediaLibrary>,
    clock: Arc<dyn Clock>,
}

impl SiteSettingCommandService {
    pub fn new(
        repo: Arc<dyn SiteSettingRepository>,
        media: Arc<MediaLibrary>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, media, clock }
    }

    pub async fn create(
        &self,
        command: CreateSiteSettingCommand,
    ) -> ApplicationResult<SiteSettingDto> {
        let mut errors = FieldErrors::collect(&command);
        let key = match SettingKey::new(command.setting_key.clone()) {
            Ok(key) => Some(key),
            Err(err) => {
                if !errors.contains("setting_key") {
                    errors.add("setting_key", err.to_string());
                }
                None
            }
        };
        if let Some(key) = &key
            && self.repo.find_by_key(key).await?.is_some()
        {
            errors.add("setting_key", "The setting key has already been taken.");
        }
        let setting_type = if errors.contains("setting_type") {
            None
        } else {
            match command.setting_type.parse::<SettingType>() {
                Ok(kind) => Some(kind),
                Err(_) => {
                    errors.add("setting_type", "The selected setting type is invalid.");
                    None
                }
            }
        };
        let raw_value = command.setting_value.map(stored_text);
        if raw_value.is_none() {
            errors.add("setting_value", "The setting value field is required.");
        }
        errors.into_result()?;

        let (Some(key), Some(setting_type), Some(raw_value)) = (key, setting_type, raw_value)
        else {
            return Err(ApplicationError::validation("setting fields are missing"));
        };
        let value = on_field(setting_type.normalize_value(&raw_value), "setting_value")?;

        let setting = self
            .repo
            .insert(NewSiteSetting {
                key,
                value,
                setting_type,
                description: command.description,
                updated_at: self.clock.now(),
            })
            .await?;
        Ok(setting.into())
    }

    pub async fn update(
        &self,
        key: &str,
        command: UpdateSiteSettingCommand,
    ) -> ApplicationResult<SiteSettingDto> {
        let current = self.load(key).await?;
        let setting_type = command
            .setting_type
            .as_deref()
            .map(|raw| on_field(raw.parse::<SettingType>(), "setting_type"))
            .transpose()?;
        let effective_type = setting_type.unwrap_or(current.setting_type);

        let value = match command.setting_value.map(stored_text) {
            Some(raw) => Some(on_field(effective_type.normalize_value(&raw), "setting_value")?),
            None if setting_type.is_some() => Some(on_field(
                effective_type.normalize_value(&current.value),
                "setting_value",
            )?),
            None => None,
        };

        let changes = SiteSettingChanges {
            value,
            setting_type,
            description: command.description,
            updated_at: self.clock.now(),
        };
        self.apply(&current, changes).await
    }

    pub async fn delete(&self, key: &str) -> ApplicationResult<()> {
        let current = self.load(key).await?;
        self.repo.delete(&current.key).await?;
        if current.setting_type == SettingType::Image {
            self.media.discard(Some(current.value.as_str())).await;
        }
        info!(setting_key = %current.key, "site setting deleted");
        Ok(())
    }

    pub async fn upload_image(
        &self,
        key: &str,
        file: UploadedFile,
    ) -> ApplicationResult<SiteSettingDto> {
        let current = self.load(key).await?;
        if current.setting_type != SettingType::Image {
            return Err(ApplicationError::field(
                "file",
                "This setting does not accept an image upload.",
            ));
        }
        let path = self.media.store(MediaNamespace::Settings, file).await?;
        let changes = SiteSettingChanges {
            value: Some(path),
            setting_type: None,
            description: None,
            updated_at: self.clock.now(),
        };
        self.apply(&current, changes).await
    }

    async fn apply(
        &self,
        current: &SiteSetting,
        changes: SiteSettingChanges,
    ) -> ApplicationResult<SiteSettingDto> {
        let updated = self.repo.update(&current.key, changes).await?;
        if current.setting_type == SettingType::Image {
            self.media
                .discard_replaced(Some(current.value.as_str()), Some(updated.value.as_str()))
                .await;
        }
        Ok(updated.into())
    }

    async fn load(&self, key: &str) -> ApplicationResult<SiteSetting> {
        let not_found = || ApplicationError::not_found("Setting not found");
        let key = SettingKey::new(key).map_err(|_| not_found())?;
        self.repo.find_by_key(&key).await?.ok_or_else(not_found)
    }
}

fn stored_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_string_values_keep_their_json_text() {
        assert_eq!(stored_text(Value::String("hi".into())), "hi");
        assert_eq!(stored_text(Value::Bool(true)), "true");
        assert_eq!(stored_text(serde_json::json!({"a": 1})), r#"{"a":1}"#);
    }
}
