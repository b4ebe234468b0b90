// src/application/queries/testimonials.rs
use std::sync::Arc;

use super::{flag, search_term};
use crate::{
    application::{
        dto::{PageDto, ServiceTestimonialsDto, TestimonialDto, TestimonialStatsDto},
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        common::PageRequest,
        service::ServiceRepository,
        testimonial::{Rating, TestimonialFilter, TestimonialRepository, average_rating},
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

const DEFAULT_PER_PAGE: u32 = 15;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTestimonialsQuery {
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub approved: Option<bool>,
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub featured: Option<bool>,
    pub service_id: Option<i64>,
    /// Exact rating, 1 to 5.
    pub rating: Option<i16>,
    pub min_rating: Option<i16>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub struct TestimonialQueryService {
    repo: Arc<dyn TestimonialRepository>,
    services: Arc<dyn ServiceRepository>,
}

impl TestimonialQueryService {
    pub fn new(repo: Arc<dyn TestimonialRepository>, services: Arc<dyn ServiceRepository>) -> Self {
        Self { repo, services }
    }

    pub async fn public(&self) -> ApplicationResult<Vec<TestimonialDto>> {
        self.fetch(TestimonialFilter {
            approved: Some(true),
            ..Default::default()
        })
        .await
    }

    pub async fn featured(&self) -> ApplicationResult<Vec<TestimonialDto>> {
        self.fetch(TestimonialFilter {
            approved: Some(true),
            featured: Some(true),
            ..Default::default()
        })
        .await
    }

    pub async fn by_service(&self, service_id: i64) -> ApplicationResult<ServiceTestimonialsDto> {
        let service = self
            .services
            .find_by_id(service_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Service not found"))?;
        let testimonials = self
            .repo
            .list(&TestimonialFilter {
                approved: Some(true),
                service_id: Some(service_id),
                ..Default::default()
            })
            .await?;
        let average_rating = average_rating(&testimonials);
        Ok(ServiceTestimonialsDto {
            service: service.into(),
            count: testimonials.len(),
            average_rating,
            testimonials: testimonials.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn list(
        &self,
        query: ListTestimonialsQuery,
    ) -> ApplicationResult<PageDto<TestimonialDto>> {
        let mut errors = FieldErrors::new();
        let rating = rating_param(&mut errors, "rating", query.rating);
        let min_rating = rating_param(&mut errors, "min_rating", query.min_rating);
        errors.into_result()?;

        let filter = TestimonialFilter {
            approved: query.approved,
            featured: query.featured,
            service_id: query.service_id,
            rating,
            min_rating,
            search: search_term(query.search),
        };
        let page = PageRequest::new(query.page, query.per_page, DEFAULT_PER_PAGE);
        let testimonials = self.repo.list_page(&filter, page).await?;
        Ok(PageDto::from_page(testimonials))
    }

    pub async fn stats(&self) -> ApplicationResult<TestimonialStatsDto> {
        Ok(self.repo.stats().await?.into())
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<TestimonialDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Testimonial not found"))
    }

    async fn fetch(&self, filter: TestimonialFilter) -> ApplicationResult<Vec<TestimonialDto>> {
        let testimonials = self.repo.list(&filter).await?;
        Ok(testimonials.into_iter().map(Into::into).collect())
    }
}

fn rating_param(errors: &mut FieldErrors, field: &str, value: Option<i16>) -> Option<Rating> {
    let value = value?;
    match Rating::new(value) {
        Ok(rating) => Some(rating),
        Err(_) => {
            errors.add(field, format!("The {} must be between 1 and 5.", field.replace('_', " ")));
            None
        }
    }
}
