// src/application/queries/plan_features.rs
use std::sync::Arc;

use super::flag;
use crate::{
    application::{
        dto::PlanFeatureDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        hosting_plan::HostingPlanRepository,
        plan_feature::{PlanFeatureFilter, PlanFeatureRepository},
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPlanFeaturesQuery {
    pub plan_id: Option<i64>,
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub included: Option<bool>,
}

pub struct PlanFeatureQueryService {
    repo: Arc<dyn PlanFeatureRepository>,
    plans: Arc<dyn HostingPlanRepository>,
}

impl PlanFeatureQueryService {
    pub fn new(
        repo: Arc<dyn PlanFeatureRepository>,
        plans: Arc<dyn HostingPlanRepository>,
    ) -> Self {
        Self { repo, plans }
    }

    pub async fn list(
        &self,
        query: ListPlanFeaturesQuery,
    ) -> ApplicationResult<Vec<PlanFeatureDto>> {
        let filter = PlanFeatureFilter {
            plan_id: query.plan_id,
            included: query.included,
        };
        let features = self.repo.list(&filter).await?;
        Ok(features.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<PlanFeatureDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Plan feature not found"))
    }

    pub async fn by_plan(&self, plan_id: i64) -> ApplicationResult<Vec<PlanFeatureDto>> {
        if self.plans.find_by_id(plan_id).await?.is_none() {
            return Err(ApplicationError::not_found("Hosting plan not found"));
        }
        self.list(ListPlanFeaturesQuery {
            plan_id: Some(plan_id),
            included: None,
        })
        .await
    }
}
