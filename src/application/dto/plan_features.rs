// src/application/dto/plan_features.rs
use crate::domain::plan_feature::PlanFeature;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanFeatureDto {
    pub id: i64,
    pub plan_id: i64,
    pub feature_name: String,
    pub is_included: bool,
    pub feature_value: Option<String>,
    pub tooltip: Option<String>,
    pub sort_order: i32,
}

impl From<PlanFeature> for PlanFeatureDto {
    fn from(feature: PlanFeature) -> Self {
        Self {
            id: feature.id,
            plan_id: feature.plan_id,
            feature_name: feature.feature_name,
            is_included: feature.is_included,
            feature_value: feature.feature_value,
            tooltip: feature.tooltip,
            sort_order: feature.sort_order,
        }
    }
}
