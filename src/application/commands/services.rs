// src/application/commands/services.rs
use std::sync::Arc;

use super::{exists_message, on_field, patch};
use crate::{
    application::{
        dto::ServiceDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        validation::FieldErrors,
    },
    domain::{
        service::{NewService, SLUG_FALLBACK, Service, ServiceChanges, ServiceRepository},
        service_category::ServiceCategoryRepository,
        slug::SlugAssigner,
    },
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateServiceCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 200,
        message = "The name field is required and may not be greater than 200 characters."
    ))]
    pub name: String,
    #[validate(length(max = 200, message = "The slug may not be greater than 200 characters."))]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    #[validate(length(max = 255, message = "The icon may not be greater than 255 characters."))]
    pub icon: Option<String>,
    pub is_active: Option<bool>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceCommand {
    #[validate(length(
        min = 1,
        max = 200,
        message = "The name must be between 1 and 200 characters."
    ))]
    pub name: Option<String>,
    #[validate(length(max = 200, message = "The slug may not be greater than 200 characters."))]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255, message = "The icon may not be greater than 255 characters."))]
    pub icon: Option<Option<String>>,
    pub is_active: Option<bool>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
}

pub struct ServiceCommandService {
    repo: Arc<dyn ServiceRepository>,
    categories: Arc<dyn ServiceCategoryRepository>,
    slugs: Arc<SlugAssigner>,
    clock: Arc<dyn Clock>,
}

impl ServiceCommandService {
    pub fn new(
        repo: Arc<dyn ServiceRepository>,
        categories: Arc<dyn ServiceCategoryRepository>,
        slugs: Arc<SlugAssigner>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            categories,
            slugs,
            clock,
        }
    }

    pub async fn create(&self, command: CreateServiceCommand) -> ApplicationResult<ServiceDto> {
        let mut errors = FieldErrors::collect(&command);
        self.check_category(&mut errors, command.category_id).await?;
        errors.into_result()?;

        let slug = on_field(
            self.slugs
                .assign(
                    self.repo.as_ref(),
                    &command.name,
                    command.slug.as_deref(),
                    SLUG_FALLBACK,
                )
                .await,
            "slug",
        )?;

        let service = self
            .repo
            .insert(NewService {
                name: command.name,
                slug,
                description: command.description,
                category_id: command.category_id,
                icon: command.icon,
                is_active: command.is_active.unwrap_or(true),
                sort_order: command.sort_order.unwrap_or(0),
                created_at: self.clock.now(),
            })
            .await?;
        info!(service_id = service.id, slug = %service.slug, "service created");
        Ok(service.into())
    }

    pub async fn update(
        &self,
        id: i64,
        command: UpdateServiceCommand,
    ) -> ApplicationResult<ServiceDto> {
        let current = self.load(id).await?;
        let mut errors = FieldErrors::collect(&command);
        self.check_category(&mut errors, command.category_id.flatten())
            .await?;
        errors.into_result()?;

        let slug = on_field(
            self.slugs
                .reassign(
                    self.repo.as_ref(),
                    id,
                    &current.slug,
                    &current.name,
                    command.name.as_deref(),
                    command.slug.as_deref(),
                    SLUG_FALLBACK,
                )
                .await,
            "slug",
        )?;

        let changes = ServiceChanges {
            name: command.name,
            slug: (slug != current.slug).then_some(slug),
            description: command.description,
            category_id: command.category_id,
            icon: command.icon,
            is_active: command.is_active,
            sort_order: command.sort_order,
            updated_at: self.clock.now(),
        };
        Ok(self.repo.update(id, changes).await?.into())
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        self.load(id).await?;
        self.repo.delete(id).await?;
        info!(service_id = id, "service deleted");
        Ok(())
    }

    pub async fn toggle_active(&self, id: i64) -> ApplicationResult<ServiceDto> {
        self.load(id).await?;
        Ok(self.repo.toggle_active(id, self.clock.now()).await?.into())
    }

    async fn check_category(
        &self,
        errors: &mut FieldErrors,
        category_id: Option<i64>,
    ) -> ApplicationResult<()> {
        if let Some(category_id) = category_id
            && self.categories.find_by_id(category_id).await?.is_none()
        {
            errors.add("category_id", exists_message("category_id"));
        }
        Ok(())
    }

    async fn load(&self, id: i64) -> ApplicationResult<Service> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Service not found"))
    }
}
