// src/application/dto/testimonials.rs
use crate::application::dto::ServiceDto;
use crate::domain::testimonial::{ServiceRatingSummary, Testimonial, TestimonialStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestimonialDto {
    pub id: i64,
    pub client_name: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub testimonial: String,
    pub rating: i16,
    pub photo_url: Option<String>,
    pub service_id: Option<i64>,
    pub is_featured: bool,
    pub is_approved: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Testimonial> for TestimonialDto {
    fn from(value: Testimonial) -> Self {
        Self {
            id: value.id,
            client_name: value.client_name,
            company: value.company,
            position: value.position,
            testimonial: value.testimonial,
            rating: value.rating.value(),
            photo_url: value.photo_url,
            service_id: value.service_id,
            is_featured: value.is_featured,
            is_approved: value.is_approved,
            sort_order: value.sort_order,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestimonialCountsDto {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
    pub featured: u64,
    pub average_rating: Option<f64>,
    /// Keyed by rating value `"1"` through `"5"`.
    pub rating_distribution: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceRatingDto {
    pub service_id: i64,
    pub service_name: Option<String>,
    pub count: u64,
    pub avg_rating: f64,
}

impl From<ServiceRatingSummary> for ServiceRatingDto {
    fn from(value: ServiceRatingSummary) -> Self {
        Self {
            service_id: value.service_id,
            service_name: value.service_name,
            count: value.count,
            avg_rating: value.avg_rating,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestimonialStatsDto {
    pub stats: TestimonialCountsDto,
    pub top_services: Vec<ServiceRatingDto>,
}

impl From<TestimonialStats> for TestimonialStatsDto {
    fn from(stats: TestimonialStats) -> Self {
        let rating_distribution = stats
            .rating_distribution
            .iter()
            .zip(1..)
            .map(|(count, rating)| (format!("{rating}"), *count))
            .collect();
        Self {
            stats: TestimonialCountsDto {
                total: stats.total,
                approved: stats.approved,
                pending: stats.pending,
                featured: stats.featured,
                average_rating: stats.average_rating,
                rating_distribution,
            },
            top_services: stats.top_services.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceTestimonialsDto {
    pub service: ServiceDto,
    pub testimonials: Vec<TestimonialDto>,
    pub count: usize,
    pub average_rating: Option<f64>,
}
