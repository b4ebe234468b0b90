// src/domain/hosting_plan.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::service_category::CategorySummary;
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub const SLUG_FALLBACK: &str = "hosting-plan";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanPricing {
    pub monthly: f64,
    pub yearly: f64,
    pub monthly_renewal: f64,
    pub yearly_renewal: f64,
}

impl PlanPricing {
    pub fn new(
        monthly: f64,
        yearly: f64,
        monthly_renewal: f64,
        yearly_renewal: f64,
    ) -> DomainResult<Self> {
        let prices = [monthly, yearly, monthly_renewal, yearly_renewal];
        if prices.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(DomainError::Validation(
                "prices must be non-negative numbers".into(),
            ));
        }
        Ok(Self {
            monthly,
            yearly,
            monthly_renewal,
            yearly_renewal,
        })
    }
}

#[derive(Debug, Clone)]
pub struct HostingPlan {
    pub id: i64,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub category_id: i64,
    pub category: Option<CategorySummary>,
    pub pricing: PlanPricing,
    pub is_highlighted: bool,
    pub is_popular: bool,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewHostingPlan {
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub category_id: i64,
    pub pricing: PlanPricing,
    pub is_highlighted: bool,
    pub is_popular: bool,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct HostingPlanChanges {
    pub name: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<Option<String>>,
    pub logo_url: Option<Option<String>>,
    pub category_id: Option<i64>,
    pub monthly_price: Option<f64>,
    pub yearly_price: Option<f64>,
    pub monthly_renewal_price: Option<f64>,
    pub yearly_renewal_price: Option<f64>,
    pub is_highlighted: Option<bool>,
    pub is_popular: Option<bool>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostingPlanFlag {
    Active,
    Highlighted,
    Popular,
}

impl HostingPlanFlag {
    pub fn column(self) -> &'static str {
        match self {
            Self::Active => "is_active",
            Self::Highlighted => "is_highlighted",
            Self::Popular => "is_popular",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HostingPlanFilter {
    pub active: Option<bool>,
    pub category_id: Option<i64>,
    pub highlighted: Option<bool>,
    pub popular: Option<bool>,
}

#[async_trait]
pub trait HostingPlanRepository: SlugLookup {
    async fn list(&self, filter: &HostingPlanFilter) -> DomainResult<Vec<HostingPlan>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<HostingPlan>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<HostingPlan>>;
    async fn insert(&self, plan: NewHostingPlan) -> DomainResult<HostingPlan>;
    async fn update(&self, id: i64, changes: HostingPlanChanges) -> DomainResult<HostingPlan>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn toggle(
        &self,
        id: i64,
        flag: HostingPlanFlag,
        at: DateTime<Utc>,
    ) -> DomainResult<HostingPlan>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_is_rejected() {
        assert!(PlanPricing::new(1.0, 10.0, 2.0, -0.01).is_err());
        assert!(PlanPricing::new(f64::NAN, 10.0, 2.0, 1.0).is_err());
        assert!(PlanPricing::new(0.0, 0.0, 0.0, 0.0).is_ok());
    }
}
