// src/application/queries/portfolio.rs
use std::sync::Arc;

use super::{flag, search_term};
use crate::{
    application::{
        dto::{PageDto, PortfolioDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        common::PageRequest,
        portfolio::{PortfolioFilter, PortfolioRepository},
    },
};
use chrono::{Months, NaiveDate};
use serde::Deserialize;
use utoipa::IntoParams;

const DEFAULT_PER_PAGE: u32 = 15;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPortfolioQuery {
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub published: Option<bool>,
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub featured: Option<bool>,
    pub service_id: Option<i64>,
    pub search: Option<String>,
    pub year: Option<i32>,
    /// Only projects dated within the last N months.
    pub recent_months: Option<u32>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub struct PortfolioQueryService {
    repo: Arc<dyn PortfolioRepository>,
    clock: Arc<dyn Clock>,
}

impl PortfolioQueryService {
    pub fn new(repo: Arc<dyn PortfolioRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn list(
        &self,
        query: ListPortfolioQuery,
    ) -> ApplicationResult<PageDto<PortfolioDto>> {
        let today = self.clock.now().date_naive();
        let filter = PortfolioFilter {
            published: query.published,
            featured: query.featured,
            service_id: query.service_id,
            search: search_term(query.search),
            year: query.year,
            project_date_from: query.recent_months.map(|months| months_before(today, months)),
        };
        let page = PageRequest::new(query.page, query.per_page, DEFAULT_PER_PAGE);
        let items = self.repo.list_page(&filter, page).await?;
        Ok(PageDto::from_page(items))
    }

    pub async fn get(&self, slug: &str) -> ApplicationResult<PortfolioDto> {
        self.repo
            .find_by_slug(slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Portfolio item not found"))
    }
}

fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_months_clamps_to_month_end() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(
            months_before(date, 1),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            months_before(date, 12),
            NaiveDate::from_ymd_opt(2023, 3, 31).unwrap()
        );
    }
}
