// src/application/dto/service_categories.rs
use crate::domain::service_category::ServiceCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceCategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceCategory> for ServiceCategoryDto {
    fn from(category: ServiceCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug.into(),
            description: category.description,
            icon: category.icon,
            sort_order: category.sort_order,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
