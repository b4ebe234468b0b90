// src/application/dto/common.rs
use crate::domain::service_category::CategorySummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a bulk write.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct AffectedDto {
    pub affected: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorySummaryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<CategorySummary> for CategorySummaryDto {
    fn from(value: CategorySummary) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
        }
    }
}
