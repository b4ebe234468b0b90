// src/domain/portfolio.rs
use crate::domain::common::{Page, PageRequest};
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

pub const SLUG_FALLBACK: &str = "portfolio";
pub const MAX_GALLERY_IMAGES: usize = 10;

#[derive(Debug, Clone)]
pub struct PortfolioItem {
    pub id: i64,
    pub title: String,
    pub slug: Slug,
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

impl PortfolioItem {
    /// Every stored media reference owned by the item.
    pub fn media(&self) -> impl Iterator<Item = &str> {
        self.featured_image
            .as_deref()
            .into_iter()
            .chain(self.gallery_images.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone)]
pub struct NewPortfolioItem {
    pub title: String,
    pub slug: Slug,
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
}

#[derive(Debug, Clone)]
pub struct PortfolioChanges {
    pub title: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<Option<String>>,
    pub client_name: Option<Option<String>>,
    pub project_url: Option<Option<String>>,
    pub featured_image: Option<Option<String>>,
    pub gallery_images: Option<Vec<String>>,
    pub service_id: Option<Option<i64>>,
    pub technologies_used: Option<Vec<String>>,
    pub project_date: Option<Option<NaiveDate>>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioChanges {
    pub fn at(updated_at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            slug: None,
            description: None,
            client_name: None,
            project_url: None,
            featured_image: None,
            gallery_images: None,
            service_id: None,
            technologies_used: None,
            project_date: None,
            is_featured: None,
            is_published: None,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioFlag {
    Featured,
    Published,
}

impl PortfolioFlag {
    pub fn column(self) -> &'static str {
        match self {
            Self::Featured => "is_featured",
            Self::Published => "is_published",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PortfolioFilter {
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub service_id: Option<i64>,
    pub search: Option<String>,
    pub year: Option<i32>,
    pub project_date_from: Option<NaiveDate>,
}

#[async_trait]
pub trait PortfolioRepository: SlugLookup {
    async fn list_page(
        &self,
        filter: &PortfolioFilter,
        page: PageRequest,
    ) -> DomainResult<Page<PortfolioItem>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<PortfolioItem>>;
    async fn insert(&self, item: NewPortfolioItem) -> DomainResult<PortfolioItem>;
    async fn update(&self, id: i64, changes: PortfolioChanges) -> DomainResult<PortfolioItem>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn toggle(
        &self,
        id: i64,
        flag: PortfolioFlag,
        at: DateTime<Utc>,
    ) -> DomainResult<PortfolioItem>;
}
