// src/application/commands/hosting_types.rs
use std::sync::Arc;

use super::patch;
use crate::{
    application::{
        dto::HostingTypeDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::media::{MediaLibrary, MediaNamespace, UploadedFile},
        validation::FieldErrors,
    },
    domain::hosting_type::{HostingType, HostingTypeChanges, HostingTypeRepository, NewHostingType},
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateHostingTypeCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "The name field is required and may not be greater than 255 characters."
    ))]
    pub name: String,
    #[validate(length(max = 255, message = "The image may not be greater than 255 characters."))]
    pub image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateHostingTypeCommand {
    #[validate(length(
        min = 1,
        max = 255,
        message = "The name must be between 1 and 255 characters."
    ))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255, message = "The image may not be greater than 255 characters."))]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

pub struct HostingTypeCommandService {
    repo: Arc<dyn HostingTypeRepository>,
    media: Arc<MediaLibrary>,
    clock: Arc<dyn Clock>,
}

impl HostingTypeCommandService {
    pub fn new(
        repo: Arc<dyn HostingTypeRepository>,
        media: Arc<MediaLibrary>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, media, clock }
    }

    pub async fn create(
        &self,
        command: CreateHostingTypeCommand,
    ) -> ApplicationResult<HostingTypeDto> {
        FieldErrors::collect(&command).into_result()?;
        let hosting_type = self
            .repo
            .insert(NewHostingType {
                name: command.name,
                image: command.image,
                description: command.description,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(hosting_type.into())
    }

    pub async fn update(
        &self,
        id: i64,
        command: UpdateHostingTypeCommand,
    ) -> ApplicationResult<HostingTypeDto> {
        let current = self.load(id).await?;
        FieldErrors::collect(&command).into_result()?;
        let changes = HostingTypeChanges {
            name: command.name,
            image: command.image,
            description: command.description,
            updated_at: self.clock.now(),
        };
        self.apply(&current, changes).await
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        let current = self.load(id).await?;
        self.repo.delete(id).await?;
        self.media.discard(current.image.as_deref()).await;
        info!(hosting_type_id = id, "hosting type deleted");
        Ok(())
    }

    pub async fn upload_image(
        &self,
        id: i64,
        file: UploadedFile,
    ) -> ApplicationResult<HostingTypeDto> {
        let current = self.load(id).await?;
        let path = self.media.store(MediaNamespace::HostingTypes, file).await?;
        let changes = HostingTypeChanges {
            name: None,
            image: Some(Some(path)),
            description: None,
            updated_at: self.clock.now(),
        };
        self.apply(&current, changes).await
    }

    async fn apply(
        &self,
        current: &HostingType,
        changes: HostingTypeChanges,
    ) -> ApplicationResult<HostingTypeDto> {
        let updated = self.repo.update(current.id, changes).await?;
        self.media
            .discard_replaced(current.image.as_deref(), updated.image.as_deref())
            .await;
        Ok(updated.into())
    }

    async fn load(&self, id: i64) -> ApplicationResult<HostingType> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Hosting type not found"))
    }
}
