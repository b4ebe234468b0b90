// src/application/commands/service_cards.rs
use std::sync::Arc;

use super::patch;
use crate::{
    application::{
        dto::ServiceCardDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::media::{MediaLibrary, MediaNamespace, UploadedFile},
        validation::FieldErrors,
    },
    domain::service_card::{NewServiceCard, ServiceCard, ServiceCardChanges, ServiceCardRepository},
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateServiceCardCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 150,
        message = "The name field is required and may not be greater than 150 characters."
    ))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(max = 255, message = "The picture may not be greater than 255 characters."))]
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceCardCommand {
    #[validate(length(
        min = 1,
        max = 150,
        message = "The name must be between 1 and 150 characters."
    ))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255, message = "The picture may not be greater than 255 characters."))]
    pub picture: Option<Option<String>>,
}

pub struct ServiceCardCommandService {
    repo: Arc<dyn ServiceCardRepository>,
    media: Arc<MediaLibrary>,
    clock: Arc<dyn Clock>,
}

impl ServiceCardCommandService {
    pub fn new(
        repo: Arc<dyn ServiceCardRepository>,
        media: Arc<MediaLibrary>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, media, clock }
    }

    pub async fn create(
        &self,
        command: CreateServiceCardCommand,
    ) -> ApplicationResult<ServiceCardDto> {
        FieldErrors::collect(&command).into_result()?;
        let card = self
            .repo
            .insert(NewServiceCard {
                name: command.name,
                description: command.description,
                picture: command.picture,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(card.into())
    }

    pub async fn update(
        &self,
        id: i64,
        command: UpdateServiceCardCommand,
    ) -> ApplicationResult<ServiceCardDto> {
        let current = self.load(id).await?;
        FieldErrors::collect(&command).into_result()?;
        let changes = ServiceCardChanges {
            name: command.name,
            description: command.description,
            picture: command.picture,
            updated_at: self.clock.now(),
        };
        self.apply(&current, changes).await
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        let current = self.load(id).await?;
        self.repo.delete(id).await?;
        self.media.discard(current.picture.as_deref()).await;
        info!(card_id = id, "service card deleted");
        Ok(())
    }

    pub async fn upload_picture(
        &self,
        id: i64,
        file: UploadedFile,
    ) -> ApplicationResult<ServiceCardDto> {
        let current = self.load(id).await?;
        let path = self.media.store(MediaNamespace::ServiceCards, file).await?;
        let changes = ServiceCardChanges {
            name: None,
            description: None,
            picture: Some(Some(path)),
            updated_at: self.clock.now(),
        };
        self.apply(&current, changes).await
    }

    async fn apply(
        &self,
        current: &ServiceCard,
        changes: ServiceCardChanges,
    ) -> ApplicationResult<ServiceCardDto> {
        let updated = self.repo.update(current.id, changes).await?;
        self.media
            .discard_replaced(current.picture.as_deref(), updated.picture.as_deref())
            .await;
        Ok(updated.into())
    }

    async fn load(&self, id: i64) -> ApplicationResult<ServiceCard> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Service card not found"))
    }
}
