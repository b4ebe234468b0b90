// src/application/dto/faq_categories.rs
use crate::application::dto::FaqDto;
use crate::domain::{
    faq::{Faq, FaqCounts},
    faq_category::FaqCategory,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaqCategoryDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_faqs_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<FaqDto>>,
}

impl FaqCategoryDto {
    pub fn with_counts(mut self, counts: FaqCounts) -> Self {
        self.faqs_count = Some(counts.total);
        self.active_faqs_count = Some(counts.active);
        self
    }

    pub fn with_faqs(mut self, faqs: Vec<Faq>) -> Self {
        self.faqs = Some(faqs.into_iter().map(Into::into).collect());
        self
    }
}

impl From<FaqCategory> for FaqCategoryDto {
    fn from(category: FaqCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            sort_order: category.sort_order,
            is_active: category.is_active,
            created_at: category.created_at,
            faqs_count: None,
            active_faqs_count: None,
            faqs: None,
        }
    }
}
