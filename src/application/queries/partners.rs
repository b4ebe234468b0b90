// src/application/queries/partners.rs
use std::sync::Arc;

use super::search_term;
use crate::{
    application::{
        dto::PartnerDto,
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::partner::{PartnerFilter, PartnerRepository},
};
use serde::Deserialize;
use utoipa::IntoParams;

pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPartnersQuery {
    pub search: Option<String>,
    /// `asc` (default) or `desc`, by name.
    pub order: Option<String>,
    /// 1 to 100.
    pub limit: Option<u32>,
}

pub struct PartnerQueryService {
    repo: Arc<dyn PartnerRepository>,
}

impl PartnerQueryService {
    pub fn new(repo: Arc<dyn PartnerRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, query: ListPartnersQuery) -> ApplicationResult<Vec<PartnerDto>> {
        let mut errors = FieldErrors::new();
        let descending = match query.order.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("") | Some("asc") => false,
            Some("desc") => true,
            Some(_) => {
                errors.add("order", "The selected order is invalid.");
                false
            }
        };
        if let Some(limit) = query.limit
            && !(1..=MAX_LIMIT).contains(&limit)
        {
            errors.add("limit", format!("The limit must be between 1 and {MAX_LIMIT}."));
        }
        errors.into_result()?;

        let filter = PartnerFilter {
            search: search_term(query.search),
            descending,
            limit: query.limit,
        };
        let partners = self.repo.list(&filter).await?;
        Ok(partners.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<PartnerDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Partner not found"))
    }
}
