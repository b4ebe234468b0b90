// src/application/dto/hosting_types.rs
use crate::domain::hosting_type::HostingType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HostingTypeDto {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HostingType> for HostingTypeDto {
    fn from(value: HostingType) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image: value.image,
            description: value.description,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
