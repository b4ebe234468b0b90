// src/application/dto/services.rs
use crate::application::dto::CategorySummaryDto;
use crate::domain::service::Service;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub category: Option<CategorySummaryDto>,
    pub icon: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Service> for ServiceDto {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            slug: service.slug.into(),
            description: service.description,
            category_id: service.category_id,
            category: service.category.map(Into::into),
            icon: service.icon,
            is_active: service.is_active,
            sort_order: service.sort_order,
            created_at: service.created_at,
            updated_at: service.updated_at,
        }
    }
}
