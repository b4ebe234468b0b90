// src/application/queries/services.rs
use std::sync::Arc;

use super::{Lookup, flag, search_term};
use crate::{
    application::{
        dto::ServiceDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        service::{ServiceFilter, ServiceRepository},
        service_category::ServiceCategoryRepository,
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListServicesQuery {
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub active: Option<bool>,
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

pub struct ServiceQueryService {
    repo: Arc<dyn ServiceRepository>,
    categories: Arc<dyn ServiceCategoryRepository>,
}

impl ServiceQueryService {
    pub fn new(
        repo: Arc<dyn ServiceRepository>,
        categories: Arc<dyn ServiceCategoryRepository>,
    ) -> Self {
        Self { repo, categories }
    }

    pub async fn list(&self, query: ListServicesQuery) -> ApplicationResult<Vec<ServiceDto>> {
        let filter = ServiceFilter {
            active: query.active,
            category_id: query.category_id,
            search: search_term(query.search),
        };
        let services = self.repo.list(&filter).await?;
        Ok(services.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, lookup: Lookup) -> ApplicationResult<ServiceDto> {
        let service = match lookup {
            Lookup::Id(id) => self.repo.find_by_id(id).await?,
            Lookup::Slug(slug) => self.repo.find_by_slug(&slug).await?,
        };
        service
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Service not found"))
    }

    /// Active services of one category.
    pub async fn by_category(&self, category_id: i64) -> ApplicationResult<Vec<ServiceDto>> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(ApplicationError::not_found("Service category not found"));
        }
        let filter = ServiceFilter {
            active: Some(true),
            category_id: Some(category_id),
            search: None,
        };
        let services = self.repo.list(&filter).await?;
        Ok(services.into_iter().map(Into::into).collect())
    }
}
