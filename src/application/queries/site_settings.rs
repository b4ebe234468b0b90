// src/application/queries/site_settings.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::SiteSettingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::site_setting::{SettingKey, SiteSettingRepository},
};

pub struct SiteSettingQueryService {
    repo: Arc<dyn SiteSettingRepository>,
}

impl SiteSettingQueryService {
    pub fn new(repo: Arc<dyn SiteSettingRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> ApplicationResult<Vec<SiteSettingDto>> {
        let settings = self.repo.list().await?;
        Ok(settings.into_iter().map(Into::into).collect())
    }

    /// Keys that are not well-formed cannot exist, so they read as missing.
    pub async fn get(&self, key: &str) -> ApplicationResult<SiteSettingDto> {
        let not_found = || ApplicationError::not_found("Setting not found");
        let key = SettingKey::new(key).map_err(|_| not_found())?;
        self.repo
            .find_by_key(&key)
            .await?
            .map(Into::into)
            .ok_or_else(not_found)
    }
}
