// src/application/queries/service_categories.rs
use std::sync::Arc;

use super::flag;
use crate::{
    application::{
        dto::ServiceCategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::service_category::{ServiceCategoryFilter, ServiceCategoryRepository},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListServiceCategoriesQuery {
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub active: Option<bool>,
}

pub struct ServiceCategoryQueryService {
    repo: Arc<dyn ServiceCategoryRepository>,
}

impl ServiceCategoryQueryService {
    pub fn new(repo: Arc<dyn ServiceCategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        query: ListServiceCategoriesQuery,
    ) -> ApplicationResult<Vec<ServiceCategoryDto>> {
        let filter = ServiceCategoryFilter {
            active: query.active,
        };
        let categories = self.repo.list(&filter).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<ServiceCategoryDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Service category not found"))
    }
}
