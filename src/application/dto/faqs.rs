// src/application/dto/faqs.rs
use crate::domain::faq::Faq;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaqDto {
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

impl From<Faq> for FaqDto {
    fn from(faq: Faq) -> Self {
        Self {
            id: faq.id,
            category_id: faq.category_id,
            question: faq.question,
            answer: faq.answer,
            is_featured: faq.is_featured,
            sort_order: faq.sort_order,
            is_active: faq.is_active,
            created_at: faq.created_at,
            updated_at: faq.updated_at,
        }
    }
}
