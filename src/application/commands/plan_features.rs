// src/application/commands/plan_features.rs
use std::sync::Arc;

use super::{exists_message, patch};
use crate::{
    application::{
        dto::PlanFeatureDto,
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        hosting_plan::HostingPlanRepository,
        plan_feature::{NewPlanFeature, PlanFeature, PlanFeatureChanges, PlanFeatureRepository},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreatePlanFeatureCommand {
    #[validate(required(message = "The plan id field is required."))]
    pub plan_id: Option<i64>,
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 200,
        message = "The feature name field is required and may not be greater than 200 characters."
    ))]
    pub feature_name: String,
    #[validate(required(message = "The is included field is required."))]
    pub is_included: Option<bool>,
    #[validate(length(
        max = 100,
        message = "The feature value may not be greater than 100 characters."
    ))]
    pub feature_value: Option<String>,
    pub tooltip: Option<String>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
}

impl From<CreatePlanFeatureCommand> for PlanFeatureInput {
    fn from(command: CreatePlanFeatureCommand) -> Self {
        Self {
            feature_name: command.feature_name,
            is_included: command.is_included,
            feature_value: command.feature_value,
            tooltip: command.tooltip,
            sort_order: command.sort_order,
        }
    }
}

/// Fields shared by single and bulk feature creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlanFeatureInput {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 200,
        message = "The feature name field is required and may not be greater than 200 characters."
    ))]
    pub feature_name: String,
    #[validate(required(message = "The is included field is required."))]
    pub is_included: Option<bool>,
    #[validate(length(
        max = 100,
        message = "The feature value may not be greater than 100 characters."
    ))]
    pub feature_value: Option<String>,
    pub tooltip: Option<String>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
}

impl PlanFeatureInput {
    fn into_new(self, plan_id: i64) -> NewPlanFeature {
        NewPlanFeature {
            plan_id,
            feature_name: self.feature_name,
            is_included: self.is_included.unwrap_or(true),
            feature_value: self.feature_value,
            tooltip: self.tooltip,
            sort_order: self.sort_order.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct BulkCreatePlanFeaturesCommand {
    #[validate(required(message = "The plan id field is required."))]
    pub plan_id: Option<i64>,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "The features field must have at least 1 item."),
        nested
    )]
    pub features: Vec<PlanFeatureInput>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePlanFeatureCommand {
    pub plan_id: Option<i64>,
    #[validate(length(
        min = 1,
        max = 200,
        message = "The feature name must be between 1 and 200 characters."
    ))]
    pub feature_name: Option<String>,
    pub is_included: Option<bool>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(
        max = 100,
        message = "The feature value may not be greater than 100 characters."
    ))]
    pub feature_value: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub tooltip: Option<Option<String>>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
}

pub struct PlanFeatureCommandService {
    repo: Arc<dyn PlanFeatureRepository>,
    plans: Arc<dyn HostingPlanRepository>,
}

impl PlanFeatureCommandService {
    pub fn new(
        repo: Arc<dyn PlanFeatureRepository>,
        plans: Arc<dyn HostingPlanRepository>,
    ) -> Self {
        Self { repo, plans }
    }

    pub async fn create(
        &self,
        command: CreatePlanFeatureCommand,
    ) -> ApplicationResult<PlanFeatureDto> {
        let mut errors = FieldErrors::collect(&command);
        self.check_plan(&mut errors, command.plan_id).await?;
        errors.into_result()?;
        let plan_id = required_plan(command.plan_id)?;

        let input = PlanFeatureInput::from(command);
        let feature = self.repo.insert(input.into_new(plan_id)).await?;
        Ok(feature.into())
    }

    pub async fn create_many(
        &self,
        command: BulkCreatePlanFeaturesCommand,
    ) -> ApplicationResult<Vec<PlanFeatureDto>> {
        let mut errors = FieldErrors::collect(&command);
        self.check_plan(&mut errors, command.plan_id).await?;
        errors.into_result()?;
        let plan_id = required_plan(command.plan_id)?;

        let features = command
            .features
            .into_iter()
            .map(|input| input.into_new(plan_id))
            .collect();
        let created = self.repo.insert_many(features).await?;
        Ok(created.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        command: UpdatePlanFeatureCommand,
    ) -> ApplicationResult<PlanFeatureDto> {
        self.load(id).await?;
        let mut errors = FieldErrors::collect(&command);
        self.check_plan(&mut errors, command.plan_id).await?;
        errors.into_result()?;

        let changes = PlanFeatureChanges {
            plan_id: command.plan_id,
            feature_name: command.feature_name,
            is_included: command.is_included,
            feature_value: command.feature_value,
            tooltip: command.tooltip,
            sort_order: command.sort_order,
        };
        Ok(self.repo.update(id, changes).await?.into())
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        self.load(id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }

    pub async fn toggle_included(&self, id: i64) -> ApplicationResult<PlanFeatureDto> {
        self.load(id).await?;
        Ok(self.repo.toggle_included(id).await?.into())
    }

    async fn check_plan(
        &self,
        errors: &mut FieldErrors,
        plan_id: Option<i64>,
    ) -> ApplicationResult<()> {
        if let Some(plan_id) = plan_id
            && self.plans.find_by_id(plan_id).await?.is_none()
        {
            errors.add("plan_id", exists_message("plan_id"));
        }
        Ok(())
    }

    async fn load(&self, id: i64) -> ApplicationResult<PlanFeature> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Plan feature not found"))
    }
}

fn required_plan(plan_id: Option<i64>) -> ApplicationResult<i64> {
    plan_id.ok_or_else(|| ApplicationError::field("plan_id", "The plan id field is required."))
}
