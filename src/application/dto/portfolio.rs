// src/application/dto/portfolio.rs
use crate::domain::portfolio::PortfolioItem;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortfolioDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub project_url: Option<String>,
    pub featured_image: Option<String>,
    pub gallery_images: Vec<String>,
    pub service_id: Option<i64>,
    pub technologies_used: Vec<String>,
    pub project_date: Option<NaiveDate>,
    pub is_featured: bool,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PortfolioItem> for PortfolioDto {
    fn from(item: PortfolioItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            slug: item.slug.into(),
            description: item.description,
            client_name: item.client_name,
            project_url: item.project_url,
            featured_image: item.featured_image,
            gallery_images: item.gallery_images,
            service_id: item.service_id,
            technologies_used: item.technologies_used,
            project_date: item.project_date,
            is_featured: item.is_featured,
            is_published: item.is_published,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
