// src/application/commands/partners.rs
use std::sync::Arc;

use super::patch;
use crate::{
    application::{
        dto::PartnerDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::media::{MediaLibrary, MediaNamespace, UploadedFile},
        validation::FieldErrors,
    },
    domain::partner::{NewPartner, Partner, PartnerChanges, PartnerRepository},
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreatePartnerCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 150,
        message = "The name field is required and may not be greater than 150 characters."
    ))]
    pub name: String,
    #[validate(length(max = 255, message = "The picture may not be greater than 255 characters."))]
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePartnerCommand {
    #[validate(length(
        min = 1,
        max = 150,
        message = "The name must be between 1 and 150 characters."
    ))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255, message = "The picture may not be greater than 255 characters."))]
    pub picture: Option<Option<String>>,
}

pub struct PartnerCommandService {
    repo: Arc<dyn PartnerRepository>,
    media: Arc<MediaLibrary>,
    clock: Arc<dyn Clock>,
}

impl PartnerCommandService {
    pub fn new(
        repo: Arc<dyn PartnerRepository>,
        media: Arc<MediaLibrary>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, media, clock }
    }

    pub async fn create(&self, command: CreatePartnerCommand) -> ApplicationResult<PartnerDto> {
        FieldErrors::collect(&command).into_result()?;
        let partner = self
            .repo
            .insert(NewPartner {
                name: command.name,
                picture: command.picture,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(partner.into())
    }

    pub async fn update(
        &self,
        id: i64,
        command: UpdatePartnerCommand,
    ) -> ApplicationResult<PartnerDto> {
        let current = self.load(id).await?;
        FieldErrors::collect(&command).into_result()?;
        let changes = PartnerChanges {
            name: command.name,
            picture: command.picture,
            updated_at: self.clock.now(),
        };
        self.apply(&current, changes).await
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        let current = self.load(id).await?;
        self.repo.delete(id).await?;
        self.media.discard(current.picture.as_deref()).await;
        info!(partner_id = id, "partner deleted");
        Ok(())
    }

    pub async fn upload_picture(
        &self,
        id: i64,
        file: UploadedFile,
    ) -> ApplicationResult<PartnerDto> {
        let current = self.load(id).await?;
        let path = self.media.store(MediaNamespace::Partners, file).await?;
        let changes = PartnerChanges {
            name: None,
            picture: Some(Some(path)),
            updated_at: self.clock.now(),
        };
        self.apply(&current, changes).await
    }

    async fn apply(
        &self,
        current: &Partner,
        changes: PartnerChanges,
    ) -> ApplicationResult<PartnerDto> {
        let updated = self.repo.update(current.id, changes).await?;
        self.media
            .discard_replaced(current.picture.as_deref(), updated.picture.as_deref())
            .await;
        Ok(updated.into())
    }

    async fn load(&self, id: i64) -> ApplicationResult<Partner> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Partner not found"))
    }
}
