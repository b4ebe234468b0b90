// src/domain/plan_feature.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct PlanFeature {
    pub id: i64,
    pub plan_id: i64,
    pub feature_name: String,
    pub is_included: bool,
    pub feature_value: Option<String>,
    pub tooltip: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone)]
pub struct NewPlanFeature {
    pub plan_id: i64,
    pub feature_name: String,
    pub is_included: bool,
    pub feature_value: Option<String>,
    pub tooltip: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PlanFeatureChanges {
    pub plan_id: Option<i64>,
    pub feature_name: Option<String>,
    pub is_included: Option<bool>,
    pub feature_value: Option<Option<String>>,
    pub tooltip: Option<Option<String>>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct PlanFeatureFilter {
    pub plan_id: Option<i64>,
    pub included: Option<bool>,
}

#[async_trait]
pub trait PlanFeatureRepository: Send + Sync {
    async fn list(&self, filter: &PlanFeatureFilter) -> DomainResult<Vec<PlanFeature>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<PlanFeature>>;
    async fn insert(&self, feature: NewPlanFeature) -> DomainResult<PlanFeature>;
    /// Inserts every feature or none.
    async fn insert_many(&self, features: Vec<NewPlanFeature>) -> DomainResult<Vec<PlanFeature>>;
    async fn update(&self, id: i64, changes: PlanFeatureChanges) -> DomainResult<PlanFeature>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn toggle_included(&self, id: i64) -> DomainResult<PlanFeature>;
}
