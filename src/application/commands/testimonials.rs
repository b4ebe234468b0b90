// src/application/commands/testimonials.rs
use std::sync::Arc;

use super::{SortOrderInput, exists_message, on_field, patch};
use crate::{
    application::{
        dto::{AffectedDto, TestimonialDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::media::{MediaLibrary, MediaNamespace, UploadedFile},
        validation::FieldErrors,
    },
    domain::{
        common::SortPosition,
        service::ServiceRepository,
        testimonial::{
            NewTestimonial, Rating, Testimonial, TestimonialBulkAction, TestimonialChanges,
            TestimonialFlag, TestimonialRepository,
        },
    },
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateTestimonialCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "The client name field is required and may not be greater than 100 characters."
    ))]
    pub client_name: String,
    #[validate(length(max = 100, message = "The company may not be greater than 100 characters."))]
    pub company: Option<String>,
    #[validate(length(max = 100, message = "The position may not be greater than 100 characters."))]
    pub position: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "The testimonial field is required."))]
    pub testimonial: String,
    #[validate(
        required(message = "The rating field is required."),
        range(min = 1, max = 5, message = "The rating must be between 1 and 5.")
    )]
    pub rating: Option<i16>,
    pub photo_url: Option<String>,
    pub service_id: Option<i64>,
    pub is_featured: Option<bool>,
    pub is_approved: Option<bool>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTestimonialCommand {
    #[validate(length(
        min = 1,
        max = 100,
        message = "The client name must be between 1 and 100 characters."
    ))]
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 100, message = "The company may not be greater than 100 characters."))]
    pub company: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 100, message = "The position may not be greater than 100 characters."))]
    pub position: Option<Option<String>>,
    #[validate(length(min = 1, message = "The testimonial may not be empty."))]
    pub testimonial: Option<String>,
    #[validate(range(min = 1, max = 5, message = "The rating must be between 1 and 5."))]
    pub rating: Option<i16>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub photo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<i64>)]
    pub service_id: Option<Option<i64>>,
    pub is_featured: Option<bool>,
    pub is_approved: Option<bool>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ReorderTestimonialsCommand {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "The testimonials field is required."),
        nested
    )]
    pub testimonials: Vec<SortOrderInput>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct BulkUpdateTestimonialsCommand {
    #[serde(default)]
    #[validate(length(min = 1, message = "The ids field must have at least 1 item."))]
    pub ids: Vec<i64>,
    #[serde(default)]
    #[validate(length(min = 1, message = "The action field is required."))]
    pub action: String,
    pub service_id: Option<i64>,
}

pub struct TestimonialCommandService {
    repo: Arc<dyn TestimonialRepository>,
    services: Arc<dyn ServiceRepository>,
    media: Arc<MediaLibrary>,
    clock: Arc<dyn Clock>,
}

impl TestimonialCommandService {
    pub fn new(
        repo: Arc<dyn TestimonialRepository>,
        services: Arc<dyn ServiceRepository>,
        media: Arc<MediaLibrary>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            services,
            media,
            clock,
        }
    }

    pub async fn create(
        &self,
        command: CreateTestimonialCommand,
    ) -> ApplicationResult<TestimonialDto> {
        let mut errors = FieldErrors::collect(&command);
        self.check_service(&mut errors, command.service_id).await?;
        errors.into_result()?;
        let rating = rating_field(command.rating)?
            .ok_or_else(|| ApplicationError::field("rating", "The rating field is required."))?;

        let testimonial = self
            .repo
            .insert(NewTestimonial {
                client_name: command.client_name,
                company: command.company,
                position: command.position,
                testimonial: command.testimonial,
                rating,
                photo_url: command.photo_url,
                service_id: command.service_id,
                is_featured: command.is_featured.unwrap_or(false),
                is_approved: command.is_approved.unwrap_or(false),
                sort_order: command.sort_order.unwrap_or(0),
                created_at: self.clock.now(),
            })
            .await?;
        Ok(testimonial.into())
    }

    pub async fn update(
        &self,
        id: i64,
        command: UpdateTestimonialCommand,
    ) -> ApplicationResult<TestimonialDto> {
        let current = self.load(id).await?;
        let mut errors = FieldErrors::collect(&command);
        self.check_service(&mut errors, command.service_id.flatten())
            .await?;
        errors.into_result()?;

        let changes = TestimonialChanges {
            client_name: command.client_name,
            company: command.company,
            position: command.position,
            testimonial: command.testimonial,
            rating: rating_field(command.rating)?,
            photo_url: command.photo_url,
            service_id: command.service_id,
            is_featured: command.is_featured,
            is_approved: command.is_approved,
            sort_order: command.sort_order,
        };
        let updated = self.repo.update(id, changes).await?;
        self.media
            .discard_replaced(current.photo_url.as_deref(), updated.photo_url.as_deref())
            .await;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        let current = self.load(id).await?;
        self.repo.delete(id).await?;
        self.media.discard(current.photo_url.as_deref()).await;
        info!(testimonial_id = id, "testimonial deleted");
        Ok(())
    }

    pub async fn toggle(
        &self,
        id: i64,
        flag: TestimonialFlag,
    ) -> ApplicationResult<TestimonialDto> {
        self.load(id).await?;
        Ok(self.repo.toggle(id, flag).await?.into())
    }

    pub async fn reorder(&self, command: ReorderTestimonialsCommand) -> ApplicationResult<()> {
        FieldErrors::collect(&command).into_result()?;
        let mut errors = FieldErrors::new();
        for (index, entry) in command.testimonials.iter().enumerate() {
            if self.repo.find_by_id(entry.id).await?.is_none() {
                errors.add(
                    &format!("testimonials.{index}.id"),
                    format!("The selected testimonials.{index}.id is invalid."),
                );
            }
        }
        errors.into_result()?;

        let positions: Vec<SortPosition> =
            command.testimonials.into_iter().map(Into::into).collect();
        self.repo.reorder(&positions).await?;
        Ok(())
    }

    pub async fn bulk_update(
        &self,
        command: BulkUpdateTestimonialsCommand,
    ) -> ApplicationResult<AffectedDto> {
        let mut errors = FieldErrors::collect(&command);
        self.check_service(&mut errors, command.service_id).await?;
        errors.into_result()?;
        let action: TestimonialBulkAction = on_field(command.action.parse(), "action")?;

        let photos = if action == TestimonialBulkAction::Delete {
            self.photos_of(&command.ids).await?
        } else {
            Vec::new()
        };
        let affected = self
            .repo
            .bulk_apply(&command.ids, action, command.service_id)
            .await?;
        self.media.discard_all(photos.iter().map(String::as_str)).await;
        info!(?action, affected, "testimonials bulk updated");
        Ok(AffectedDto { affected })
    }

    pub async fn upload_photo(
        &self,
        id: i64,
        file: UploadedFile,
    ) -> ApplicationResult<TestimonialDto> {
        let current = self.load(id).await?;
        let path = self.media.store(MediaNamespace::Testimonials, file).await?;
        let changes = TestimonialChanges {
            photo_url: Some(Some(path)),
            ..TestimonialChanges::default()
        };
        let updated = self.repo.update(id, changes).await?;
        self.media
            .discard_replaced(current.photo_url.as_deref(), updated.photo_url.as_deref())
            .await;
        Ok(updated.into())
    }

    async fn photos_of(&self, ids: &[i64]) -> ApplicationResult<Vec<String>> {
        let mut photos = Vec::new();
        for id in ids {
            if let Some(photo) = self.repo.find_by_id(*id).await?.and_then(|t| t.photo_url) {
                photos.push(photo);
            }
        }
        Ok(photos)
    }

    async fn check_service(
        &self,
        errors: &mut FieldErrors,
        service_id: Option<i64>,
    ) -> ApplicationResult<()> {
        if let Some(service_id) = service_id
            && self.services.find_by_id(service_id).await?.is_none()
        {
            errors.add("service_id", exists_message("service_id"));
        }
        Ok(())
    }

    async fn load(&self, id: i64) -> ApplicationResult<Testimonial> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Testimonial not found"))
    }
}

fn rating_field(raw: Option<i16>) -> ApplicationResult<Option<Rating>> {
    raw.map(|value| on_field(Rating::new(value), "rating"))
        .transpose()
}
