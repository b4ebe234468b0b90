// src/application/commands/faq_categories.rs
use std::sync::Arc;

use super::{SortOrderInput, patch};
use crate::{
    application::{
        dto::FaqCategoryDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        validation::FieldErrors,
    },
    domain::{
        common::SortPosition,
        faq::FaqRepository,
        faq_category::{FaqCategory, FaqCategoryChanges, FaqCategoryRepository, NewFaqCategory},
    },
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

const NAME_TAKEN: &str = "The name has already been taken.";

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateFaqCategoryCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "The name field is required and may not be greater than 100 characters."
    ))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFaqCategoryCommand {
    #[validate(length(
        min = 1,
        max = 100,
        message = "The name must be between 1 and 100 characters."
    ))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ReorderFaqCategoriesCommand {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "The categories field is required."),
        nested
    )]
    pub categories: Vec<SortOrderInput>,
}

pub struct FaqCategoryCommandService {
    repo: Arc<dyn FaqCategoryRepository>,
    faqs: Arc<dyn FaqRepository>,
    clock: Arc<dyn Clock>,
}

impl FaqCategoryCommandService {
    pub fn new(
        repo: Arc<dyn FaqCategoryRepository>,
        faqs: Arc<dyn FaqRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, faqs, clock }
    }

    pub async fn create(
        &self,
        command: CreateFaqCategoryCommand,
    ) -> ApplicationResult<FaqCategoryDto> {
        let mut errors = FieldErrors::collect(&command);
        if !errors.contains("name") && self.repo.name_taken(&command.name, None).await? {
            errors.add("name", NAME_TAKEN);
        }
        errors.into_result()?;

        let category = self
            .repo
            .insert(NewFaqCategory {
                name: command.name,
                description: command.description,
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
        command: UpdateFaqCategoryCommand,
    ) -> ApplicationResult<FaqCategoryDto> {
        self.load(id).await?;
        let mut errors = FieldErrors::collect(&command);
        if let Some(name) = command.name.as_deref()
            && !errors.contains("name")
            && self.repo.name_taken(name, Some(id)).await?
        {
            errors.add("name", NAME_TAKEN);
        }
        errors.into_result()?;

        let changes = FaqCategoryChanges {
            name: command.name,
            description: command.description,
            sort_order: command.sort_order,
            is_active: command.is_active,
        };
        Ok(self.repo.update(id, changes).await?.into())
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        self.load(id).await?;
        let faqs = self.faqs.count_in_category(id).await?;
        if faqs > 0 {
            return Err(ApplicationError::conflict(format!(
                "Cannot delete category. It has {faqs} FAQ(s) associated with it."
            )));
        }
        self.repo.delete(id).await?;
        info!(category_id = id, "faq category deleted");
        Ok(())
    }

    pub async fn toggle_active(&self, id: i64) -> ApplicationResult<FaqCategoryDto> {
        self.load(id).await?;
        Ok(self.repo.toggle_active(id).await?.into())
    }

    pub async fn reorder(&self, command: ReorderFaqCategoriesCommand) -> ApplicationResult<()> {
        FieldErrors::collect(&command).into_result()?;
        let mut errors = FieldErrors::new();
        for (index, entry) in command.categories.iter().enumerate() {
            if self.repo.find_by_id(entry.id).await?.is_none() {
                errors.add(
                    &format!("categories.{index}.id"),
                    format!("The selected categories.{index}.id is invalid."),
                );
            }
        }
        errors.into_result()?;

        let positions: Vec<SortPosition> =
            command.categories.into_iter().map(Into::into).collect();
        self.repo.reorder(&positions).await?;
        Ok(())
    }

    async fn load(&self, id: i64) -> ApplicationResult<FaqCategory> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("FAQ category not found"))
    }
}
