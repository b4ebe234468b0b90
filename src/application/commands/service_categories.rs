// src/application/commands/service_categories.rs
use std::sync::Arc;

use super::{on_field, patch};
use crate::{
    application::{
        dto::ServiceCategoryDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        validation::FieldErrors,
    },
    domain::{
        service_category::{
            NewServiceCategory, SLUG_FALLBACK, ServiceCategory, ServiceCategoryChanges,
            ServiceCategoryRepository,
        },
        slug::SlugAssigner,
    },
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateServiceCategoryCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "The name field is required and may not be greater than 100 characters."
    ))]
    pub name: String,
    #[validate(length(max = 100, message = "The slug may not be greater than 100 characters."))]
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 255, message = "The icon may not be greater than 255 characters."))]
    pub icon: Option<String>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceCategoryCommand {
    #[validate(length(
        min = 1,
        max = 100,
        message = "The name must be between 1 and 100 characters."
    ))]
    pub name: Option<String>,
    #[validate(length(max = 100, message = "The slug may not be greater than 100 characters."))]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255, message = "The icon may not be greater than 255 characters."))]
    pub icon: Option<Option<String>>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

pub struct ServiceCategoryCommandService {
    repo: Arc<dyn ServiceCategoryRepository>,
    slugs: Arc<SlugAssigner>,
    clock: Arc<dyn Clock>,
}

impl ServiceCategoryCommandService {
    pub fn new(
        repo: Arc<dyn ServiceCategoryRepository>,
        slugs: Arc<SlugAssigner>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, slugs, clock }
    }

    pub async fn create(
        &self,
        command: CreateServiceCategoryCommand,
    ) -> ApplicationResult<ServiceCategoryDto> {
        FieldErrors::collect(&command).into_result()?;

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

        let category = self
            .repo
            .insert(NewServiceCategory {
                name: command.name,
                slug,
                description: command.description,
                icon: command.icon,
                sort_order: command.sort_order.unwrap_or(0),
                is_active: command.is_active.unwrap_or(true),
                created_at: self.clock.now(),
            })
            .await?;
        Ok(category.into())
    }

    pub async fn update(
        &self,
        id: i64,
        command: UpdateServiceCategoryCommand,
    ) -> ApplicationResult<ServiceCategoryDto> {
        let current = self.load(id).await?;
        FieldErrors::collect(&command).into_result()?;

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

        let changes = ServiceCategoryChanges {
            name: command.name,
            slug: (slug != current.slug).then_some(slug),
            description: command.description,
            icon: command.icon,
            sort_order: command.sort_order,
            is_active: command.is_active,
            updated_at: self.clock.now(),
        };
        Ok(self.repo.update(id, changes).await?.into())
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        self.load(id).await?;
        let dependents = self.repo.count_dependents(id).await?;
        if dependents > 0 {
            return Err(ApplicationError::conflict(format!(
                "Cannot delete this category because it has {dependents} associated record(s). Please delete or reassign related items first."
            )));
        }
        self.repo.delete(id).await?;
        info!(category_id = id, "service category deleted");
        Ok(())
    }

    pub async fn toggle_active(&self, id: i64) -> ApplicationResult<ServiceCategoryDto> {
        self.load(id).await?;
        Ok(self.repo.toggle_active(id, self.clock.now()).await?.into())
    }

    async fn load(&self, id: i64) -> ApplicationResult<ServiceCategory> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Service category not found"))
    }
}
