// src/application/dto/hosting_plans.rs
use crate::application::dto::{CategorySummaryDto, PlanFeatureDto};
use crate::domain::{hosting_plan::HostingPlan, plan_feature::PlanFeature};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HostingPlanDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub category_id: i64,
    pub category: Option<CategorySummaryDto>,
    pub monthly_price: f64,
    pub yearly_price: f64,
    pub monthly_renewal_price: f64,
    pub yearly_renewal_price: f64,
    pub is_highlighted: bool,
    pub is_popular: bool,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present on single-plan responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<PlanFeatureDto>>,
}

impl HostingPlanDto {
    pub fn with_features(mut self, features: Vec<PlanFeature>) -> Self {
        self.features = Some(features.into_iter().map(Into::into).collect());
        self
    }
}

impl From<HostingPlan> for HostingPlanDto {
    fn from(plan: HostingPlan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            slug: plan.slug.into(),
            description: plan.description,
            logo_url: plan.logo_url,
            category_id: plan.category_id,
            category: plan.category.map(Into::into),
            monthly_price: plan.pricing.monthly,
            yearly_price: plan.pricing.yearly,
            monthly_renewal_price: plan.pricing.monthly_renewal,
            yearly_renewal_price: plan.pricing.yearly_renewal,
            is_highlighted: plan.is_highlighted,
            is_popular: plan.is_popular,
            is_active: plan.is_active,
            sort_order: plan.sort_order,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
            features: None,
        }
    }
}
