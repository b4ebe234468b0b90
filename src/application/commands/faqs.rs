// src/application/commands/faqs.rs
use std::sync::Arc;

use super::{SortOrderInput, exists_message, on_field, patch};
use crate::{
    application::{
        dto::{AffectedDto, FaqDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        validation::FieldErrors,
    },
    domain::{
        common::SortPosition,
        faq::{Faq, FaqBulkAction, FaqChanges, FaqFlag, FaqRepository, NewFaq},
        faq_category::FaqCategoryRepository,
    },
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateFaqCommand {
    pub category_id: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, message = "The question field is required."))]
    pub question: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The answer field is required."))]
    pub answer: String,
    pub is_featured: Option<bool>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFaqCommand {
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<Option<i64>>,
    #[validate(length(min = 1, message = "The question may not be empty."))]
    pub question: Option<String>,
    #[validate(length(min = 1, message = "The answer may not be empty."))]
    pub answer: Option<String>,
    pub is_featured: Option<bool>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ReorderFaqsCommand {
    #[serde(default)]
    #[validate(length(min = 1, message = "The faqs field is required."), nested)]
    pub faqs: Vec<SortOrderInput>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct BulkUpdateFaqsCommand {
    #[serde(default)]
    #[validate(length(min = 1, message = "The ids field must have at least 1 item."))]
    pub ids: Vec<i64>,
    #[serde(default)]
    #[validate(length(min = 1, message = "The action field is required."))]
    pub action: String,
    pub category_id: Option<i64>,
}

pub struct FaqCommandService {
    repo: Arc<dyn FaqRepository>,
    categories: Arc<dyn FaqCategoryRepository>,
    clock: Arc<dyn Clock>,
}

impl FaqCommandService {
    pub fn new(
        repo: Arc<dyn FaqRepository>,
        categories: Arc<dyn FaqCategoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            categories,
            clock,
        }
    }

    pub async fn create(&self, command: CreateFaqCommand) -> ApplicationResult<FaqDto> {
        let mut errors = FieldErrors::collect(&command);
        self.check_category(&mut errors, command.category_id).await?;
        errors.into_result()?;

        let faq = self
            .repo
            .insert(NewFaq {
                category_id: command.category_id,
                question: command.question,
                answer: command.answer,
                is_featured: command.is_featured.unwrap_or(false),
                sort_order: command.sort_order.unwrap_or(0),
                is_active: command.is_active.unwrap_or(true),
                created_at: self.clock.now(),
            })
            .await?;
        Ok(faq.into())
    }

    pub async fn update(&self, id: i64, command: UpdateFaqCommand) -> ApplicationResult<FaqDto> {
        self.load(id).await?;
        let mut errors = FieldErrors::collect(&command);
        self.check_category(&mut errors, command.category_id.flatten())
            .await?;
        errors.into_result()?;

        let changes = FaqChanges {
            category_id: command.category_id,
            question: command.question,
            answer: command.answer,
            is_featured: command.is_featured,
            sort_order: command.sort_order,
            is_active: command.is_active,
            updated_at: self.clock.now(),
        };
        Ok(self.repo.update(id, changes).await?.into())
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        self.load(id).await?;
        self.repo.delete(id).await?;
        info!(faq_id = id, "faq deleted");
        Ok(())
    }

    pub async fn toggle(&self, id: i64, flag: FaqFlag) -> ApplicationResult<FaqDto> {
        self.load(id).await?;
        Ok(self.repo.toggle(id, flag, self.clock.now()).await?.into())
    }

    pub async fn reorder(&self, command: ReorderFaqsCommand) -> ApplicationResult<()> {
        FieldErrors::collect(&command).into_result()?;
        let mut errors = FieldErrors::new();
        for (index, entry) in command.faqs.iter().enumerate() {
            if self.repo.find_by_id(entry.id).await?.is_none() {
                errors.add(
                    &format!("faqs.{index}.id"),
                    format!("The selected faqs.{index}.id is invalid."),
                );
            }
        }
        errors.into_result()?;

        let positions: Vec<SortPosition> = command.faqs.into_iter().map(Into::into).collect();
        self.repo.reorder(&positions, self.clock.now()).await?;
        Ok(())
    }

    pub async fn bulk_update(
        &self,
        command: BulkUpdateFaqsCommand,
    ) -> ApplicationResult<AffectedDto> {
        let mut errors = FieldErrors::collect(&command);
        self.check_category(&mut errors, command.category_id).await?;
        errors.into_result()?;
        let action: FaqBulkAction = on_field(command.action.parse(), "action")?;

        let affected = self
            .repo
            .bulk_apply(&command.ids, action, command.category_id, self.clock.now())
            .await?;
        info!(?action, affected, "faqs bulk updated");
        Ok(AffectedDto { affected })
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

    async fn load(&self, id: i64) -> ApplicationResult<Faq> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("FAQ not found"))
    }
}
