// src/application/queries/faqs.rs
use std::sync::Arc;

use super::{flag, search_term};
use crate::{
    application::{
        dto::FaqDto,
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        faq::{FaqFilter, FaqRepository},
        faq_category::FaqCategoryRepository,
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

pub const MIN_SEARCH_LEN: usize = 3;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListFaqsQuery {
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub active: Option<bool>,
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub featured: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchFaqsQuery {
    /// At least three characters.
    pub q: Option<String>,
}

pub struct FaqQueryService {
    repo: Arc<dyn FaqRepository>,
    categories: Arc<dyn FaqCategoryRepository>,
}

impl FaqQueryService {
    pub fn new(repo: Arc<dyn FaqRepository>, categories: Arc<dyn FaqCategoryRepository>) -> Self {
        Self { repo, categories }
    }

    pub async fn list(&self, query: ListFaqsQuery) -> ApplicationResult<Vec<FaqDto>> {
        self.fetch(FaqFilter {
            category_id: query.category_id,
            active: query.active,
            featured: query.featured,
            search: search_term(query.search),
            visible_categories_only: false,
        })
        .await
    }

    pub async fn featured(&self) -> ApplicationResult<Vec<FaqDto>> {
        self.fetch(FaqFilter {
            active: Some(true),
            featured: Some(true),
            ..Default::default()
        })
        .await
    }

    /// Active FAQs that are uncategorised or sit in an active category.
    pub async fn public(&self) -> ApplicationResult<Vec<FaqDto>> {
        self.fetch(public_filter(None)).await
    }

    pub async fn search(&self, query: SearchFaqsQuery) -> ApplicationResult<Vec<FaqDto>> {
        let term = query.q.as_deref().map(str::trim).unwrap_or_default();
        if term.is_empty() {
            return Err(FieldErrors::single("q", "The q field is required.").into());
        }
        if term.chars().count() < MIN_SEARCH_LEN {
            return Err(FieldErrors::single(
                "q",
                format!("The q must be at least {MIN_SEARCH_LEN} characters."),
            )
            .into());
        }
        self.fetch(public_filter(Some(term.to_string()))).await
    }

    pub async fn by_category(&self, category_id: i64) -> ApplicationResult<Vec<FaqDto>> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(ApplicationError::not_found("FAQ category not found"));
        }
        self.fetch(FaqFilter {
            category_id: Some(category_id),
            active: Some(true),
            ..Default::default()
        })
        .await
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<FaqDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("FAQ not found"))
    }

    async fn fetch(&self, filter: FaqFilter) -> ApplicationResult<Vec<FaqDto>> {
        let faqs = self.repo.list(&filter).await?;
        Ok(faqs.into_iter().map(Into::into).collect())
    }
}

fn public_filter(search: Option<String>) -> FaqFilter {
    FaqFilter {
        category_id: None,
        active: Some(true),
        featured: None,
        search,
        visible_categories_only: true,
    }
}
