// src/application/queries/hosting_plans.rs
use std::sync::Arc;

use super::{Lookup, flag};
use crate::{
    application::{
        dto::HostingPlanDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        hosting_plan::{HostingPlanFilter, HostingPlanRepository},
        plan_feature::{PlanFeatureFilter, PlanFeatureRepository},
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListHostingPlansQuery {
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub active: Option<bool>,
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub highlighted: Option<bool>,
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub popular: Option<bool>,
}

pub struct HostingPlanQueryService {
    repo: Arc<dyn HostingPlanRepository>,
    features: Arc<dyn PlanFeatureRepository>,
}

impl HostingPlanQueryService {
    pub fn new(
        repo: Arc<dyn HostingPlanRepository>,
        features: Arc<dyn PlanFeatureRepository>,
    ) -> Self {
        Self { repo, features }
    }

    pub async fn list(
        &self,
        query: ListHostingPlansQuery,
    ) -> ApplicationResult<Vec<HostingPlanDto>> {
        let filter = HostingPlanFilter {
            active: query.active,
            category_id: query.category_id,
            highlighted: query.highlighted,
            popular: query.popular,
        };
        let plans = self.repo.list(&filter).await?;
        Ok(plans.into_iter().map(Into::into).collect())
    }

    /// Single plan with its features embedded.
    pub async fn get(&self, lookup: Lookup) -> ApplicationResult<HostingPlanDto> {
        let plan = match lookup {
            Lookup::Id(id) => self.repo.find_by_id(id).await?,
            Lookup::Slug(slug) => self.repo.find_by_slug(&slug).await?,
        }
        .ok_or_else(|| ApplicationError::not_found("Hosting plan not found"))?;

        let features = self
            .features
            .list(&PlanFeatureFilter {
                plan_id: Some(plan.id),
                included: None,
            })
            .await?;
        Ok(HostingPlanDto::from(plan).with_features(features))
    }
}
