// src/domain/faq.rs
use crate::domain::common::SortPosition;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::{collections::HashMap, str::FromStr};

#[derive(Debug, Clone)]
pub struct Faq {
    pub id: i64,
    pub category_id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub is_featured: bool,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFaq {
    pub category_id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub is_featured: bool,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FaqChanges {
    pub category_id: Option<Option<i64>>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqFlag {
    Active,
    Featured,
}

impl FaqFlag {
    pub fn column(self) -> &'static str {
        match self {
            Self::Active => "is_active",
            Self::Featured => "is_featured",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqBulkAction {
    Activate,
    Deactivate,
    Feature,
    Unfeature,
    Delete,
}

impl FromStr for FaqBulkAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activate" => Ok(Self::Activate),
            "deactivate" => Ok(Self::Deactivate),
            "feature" => Ok(Self::Feature),
            "unfeature" => Ok(Self::Unfeature),
            "delete" => Ok(Self::Delete),
            other => Err(DomainError::Validation(format!(
                "unknown bulk action '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FaqFilter {
    pub category_id: Option<i64>,
    pub active: Option<bool>,
    pub featured: Option<bool>,
    pub search: Option<String>,
    /// Only FAQs without a category or whose category is active.
    pub visible_categories_only: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqCounts {
    pub total: u64,
    pub active: u64,
}

#[async_trait]
pub trait FaqRepository: Send + Sync {
    async fn list(&self, filter: &FaqFilter) -> DomainResult<Vec<Faq>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Faq>>;
    async fn insert(&self, faq: NewFaq) -> DomainResult<Faq>;
    async fn update(&self, id: i64, changes: FaqChanges) -> DomainResult<Faq>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn toggle(&self, id: i64, flag: FaqFlag, at: DateTime<Utc>) -> DomainResult<Faq>;
    async fn reorder(&self, positions: &[SortPosition], at: DateTime<Utc>) -> DomainResult<()>;
    /// Returns the number of rows touched.
    async fn bulk_apply(
        &self,
        ids: &[i64],
        action: FaqBulkAction,
        category_id: Option<i64>,
        at: DateTime<Utc>,
    ) -> DomainResult<u64>;
    async fn count_in_category(&self, category_id: i64) -> DomainResult<u64>;
    async fn counts_by_category(&self) -> DomainResult<HashMap<i64, FaqCounts>>;
}
