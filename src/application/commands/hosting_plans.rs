// src/application/commands/hosting_plans.rs
use std::sync::Arc;

use super::{exists_message, on_field, patch};
use crate::{
    application::{
        dto::HostingPlanDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        validation::FieldErrors,
    },
    domain::{
        hosting_plan::{
            HostingPlan, HostingPlanChanges, HostingPlanFlag, HostingPlanRepository,
            NewHostingPlan, PlanPricing, SLUG_FALLBACK,
        },
        service_category::ServiceCategoryRepository,
        slug::SlugAssigner,
    },
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateHostingPlanCommand {
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
    #[validate(length(max = 255, message = "The logo url may not be greater than 255 characters."))]
    pub logo_url: Option<String>,
    #[validate(required(message = "The category id field is required."))]
    pub category_id: Option<i64>,
    #[validate(
        required(message = "The monthly price field is required."),
        range(min = 0.0, message = "The monthly price must be at least 0.")
    )]
    pub monthly_price: Option<f64>,
    #[validate(
        required(message = "The yearly price field is required."),
        range(min = 0.0, message = "The yearly price must be at least 0.")
    )]
    pub yearly_price: Option<f64>,
    #[validate(
        required(message = "The monthly renewal price field is required."),
        range(min = 0.0, message = "The monthly renewal price must be at least 0.")
    )]
    pub monthly_renewal_price: Option<f64>,
    #[validate(
        required(message = "The yearly renewal price field is required."),
        range(min = 0.0, message = "The yearly renewal price must be at least 0.")
    )]
    pub yearly_renewal_price: Option<f64>,
    pub is_highlighted: Option<bool>,
    pub is_popular: Option<bool>,
    pub is_active: Option<bool>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateHostingPlanCommand {
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
    #[validate(length(max = 255, message = "The logo url may not be greater than 255 characters."))]
    pub logo_url: Option<Option<String>>,
    pub category_id: Option<i64>,
    #[validate(range(min = 0.0, message = "The monthly price must be at least 0."))]
    pub monthly_price: Option<f64>,
    #[validate(range(min = 0.0, message = "The yearly price must be at least 0."))]
    pub yearly_price: Option<f64>,
    #[validate(range(min = 0.0, message = "The monthly renewal price must be at least 0."))]
    pub monthly_renewal_price: Option<f64>,
    #[validate(range(min = 0.0, message = "The yearly renewal price must be at least 0."))]
    pub yearly_renewal_price: Option<f64>,
    pub is_highlighted: Option<bool>,
    pub is_popular: Option<bool>,
    pub is_active: Option<bool>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
}

pub struct HostingPlanCommandService {
    repo: Arc<dyn HostingPlanRepository>,
    categories: Arc<dyn ServiceCategoryRepository>,
    slugs: Arc<SlugAssigner>,
    clock: Arc<dyn Clock>,
}

impl HostingPlanCommandService {
    pub fn new(
        repo: Arc<dyn HostingPlanRepository>,
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

    pub async fn create(
        &self,
        command: CreateHostingPlanCommand,
    ) -> ApplicationResult<HostingPlanDto> {
        let mut errors = FieldErrors::collect(&command);
        self.check_category(&mut errors, command.category_id).await?;
        errors.into_result()?;

        let (
            Some(category_id),
            Some(monthly),
            Some(yearly),
            Some(monthly_renewal),
            Some(yearly_renewal),
        ) = (
            command.category_id,
            command.monthly_price,
            command.yearly_price,
            command.monthly_renewal_price,
            command.yearly_renewal_price,
        )
        else {
            return Err(ApplicationError::validation("required plan fields are missing"));
        };
        let pricing = PlanPricing::new(monthly, yearly, monthly_renewal, yearly_renewal)?;

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

        let plan = self
            .repo
            .insert(NewHostingPlan {
                name: command.name,
                slug,
                description: command.description,
                logo_url: command.logo_url,
                category_id,
                pricing,
                is_highlighted: command.is_highlighted.unwrap_or(false),
                is_popular: command.is_popular.unwrap_or(false),
                is_active: command.is_active.unwrap_or(true),
                sort_order: command.sort_order.unwrap_or(0),
                created_at: self.clock.now(),
            })
            .await?;
        info!(plan_id = plan.id, slug = %plan.slug, "hosting plan created");
        Ok(plan.into())
    }

    pub async fn update(
        &self,
        id: i64,
        command: UpdateHostingPlanCommand,
    ) -> ApplicationResult<HostingPlanDto> {
        let current = self.load(id).await?;
        let mut errors = FieldErrors::collect(&command);
        self.check_category(&mut errors, command.category_id).await?;
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

        let changes = HostingPlanChanges {
            name: command.name,
            slug: (slug != current.slug).then_some(slug),
            description: command.description,
            logo_url: command.logo_url,
            category_id: command.category_id,
            monthly_price: command.monthly_price,
            yearly_price: command.yearly_price,
            monthly_renewal_price: command.monthly_renewal_price,
            yearly_renewal_price: command.yearly_renewal_price,
            is_highlighted: command.is_highlighted,
            is_popular: command.is_popular,
            is_active: command.is_active,
            sort_order: command.sort_order,
            updated_at: self.clock.now(),
        };
        Ok(self.repo.update(id, changes).await?.into())
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        self.load(id).await?;
        self.repo.delete(id).await?;
        info!(plan_id = id, "hosting plan deleted");
        Ok(())
    }

    pub async fn toggle(
        &self,
        id: i64,
        flag: HostingPlanFlag,
    ) -> ApplicationResult<HostingPlanDto> {
        self.load(id).await?;
        Ok(self.repo.toggle(id, flag, self.clock.now()).await?.into())
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

    async fn load(&self, id: i64) -> ApplicationResult<HostingPlan> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Hosting plan not found"))
    }
}
