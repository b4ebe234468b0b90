// src/application/queries/faq_categories.rs
use std::{collections::HashMap, sync::Arc};

use super::{flag, search_term};
use crate::{
    application::{
        dto::FaqCategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        faq::{Faq, FaqFilter, FaqRepository},
        faq_category::{FaqCategoryFilter, FaqCategoryRepository},
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListFaqCategoriesQuery {
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub active: Option<bool>,
    pub search: Option<String>,
    /// Adds `faqs_count` and `active_faqs_count` to each category.
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub with_counts: Option<bool>,
}

pub struct FaqCategoryQueryService {
    repo: Arc<dyn FaqCategoryRepository>,
    faqs: Arc<dyn FaqRepository>,
}

impl FaqCategoryQueryService {
    pub fn new(repo: Arc<dyn FaqCategoryRepository>, faqs: Arc<dyn FaqRepository>) -> Self {
        Self { repo, faqs }
    }

    pub async fn list(
        &self,
        query: ListFaqCategoriesQuery,
    ) -> ApplicationResult<Vec<FaqCategoryDto>> {
        let filter = FaqCategoryFilter {
            active: query.active,
            search: search_term(query.search),
        };
        let categories = self.repo.list(&filter).await?;
        if !query.with_counts.unwrap_or(false) {
            return Ok(categories.into_iter().map(Into::into).collect());
        }

        let counts = self.faqs.counts_by_category().await?;
        Ok(categories
            .into_iter()
            .map(|category| {
                let tally = counts.get(&category.id).copied().unwrap_or_default();
                FaqCategoryDto::from(category).with_counts(tally)
            })
            .collect())
    }

    /// Active categories, each carrying its active FAQs.
    pub async fn active_with_faqs(&self) -> ApplicationResult<Vec<FaqCategoryDto>> {
        let categories = self
            .repo
            .list(&FaqCategoryFilter {
                active: Some(true),
                search: None,
            })
            .await?;
        let active_faqs = self
            .faqs
            .list(&FaqFilter {
                active: Some(true),
                ..Default::default()
            })
            .await?;

        let mut grouped: HashMap<i64, Vec<Faq>> = HashMap::new();
        for faq in active_faqs {
            if let Some(category_id) = faq.category_id {
                grouped.entry(category_id).or_default().push(faq);
            }
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let faqs = grouped.remove(&category.id).unwrap_or_default();
                let mut dto = FaqCategoryDto::from(category);
                dto.active_faqs_count = Some(faqs.len() as u64);
                dto.with_faqs(faqs)
            })
            .collect())
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<FaqCategoryDto> {
        let category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("FAQ category not found"))?;
        let faqs = self
            .faqs
            .list(&FaqFilter {
                category_id: Some(id),
                ..Default::default()
            })
            .await?;
        Ok(FaqCategoryDto::from(category).with_faqs(faqs))
    }
}
