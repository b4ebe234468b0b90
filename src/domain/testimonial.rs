// src/domain/testimonial.rs
use crate::domain::common::{Page, PageRequest, SortPosition};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(i16);

impl Rating {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 5;

    pub fn new(value: i16) -> DomainResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::Validation(format!(
                "rating must be between {} and {}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn value(self) -> i16 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Testimonial {
    pub id: i64,
    pub client_name: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub testimonial: String,
    pub rating: Rating,
    pub photo_url: Option<String>,
    pub service_id: Option<i64>,
    pub is_featured: bool,
    pub is_approved: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTestimonial {
    pub client_name: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub testimonial: String,
    pub rating: Rating,
    pub photo_url: Option<String>,
    pub service_id: Option<i64>,
    pub is_featured: bool,
    pub is_approved: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialChanges {
    pub client_name: Option<String>,
    pub company: Option<Option<String>>,
    pub position: Option<Option<String>>,
    pub testimonial: Option<String>,
    pub rating: Option<Rating>,
    pub photo_url: Option<Option<String>>,
    pub service_id: Option<Option<i64>>,
    pub is_featured: Option<bool>,
    pub is_approved: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestimonialFlag {
    Approved,
    Featured,
}

impl TestimonialFlag {
    pub fn column(self) -> &'static str {
        match self {
            Self::Approved => "is_approved",
            Self::Featured => "is_featured",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestimonialBulkAction {
    Approve,
    Unapprove,
    Feature,
    Unfeature,
    Delete,
}

impl FromStr for TestimonialBulkAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(Self::Approve),
            "unapprove" => Ok(Self::Unapprove),
            "feature" => Ok(Self::Feature),
            "unfeature" => Ok(Self::Unfeature),
            "delete" => Ok(Self::Delete),
            other => Err(DomainError::Validation(format!(
                "unknown bulk action '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialFilter {
    pub approved: Option<bool>,
    pub featured: Option<bool>,
    pub service_id: Option<i64>,
    pub rating: Option<Rating>,
    pub min_rating: Option<Rating>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRatingSummary {
    pub service_id: i64,
    pub service_name: Option<String>,
    pub count: u64,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialStats {
    pub total: u64,
    pub approved: u64,
    pub pending: u64,
    pub featured: u64,
    /// Over approved testimonials; `None` when there are none.
    pub average_rating: Option<f64>,
    /// Count per rating value, index 0 is a rating of 1.
    pub rating_distribution: [u64; 5],
    pub top_services: Vec<ServiceRatingSummary>,
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list(&self, filter: &TestimonialFilter) -> DomainResult<Vec<Testimonial>>;
    async fn list_page(
        &self,
        filter: &TestimonialFilter,
        page: PageRequest,
    ) -> DomainResult<Page<Testimonial>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Testimonial>>;
    async fn insert(&self, testimonial: NewTestimonial) -> DomainResult<Testimonial>;
    async fn update(&self, id: i64, changes: TestimonialChanges) -> DomainResult<Testimonial>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn toggle(&self, id: i64, flag: TestimonialFlag) -> DomainResult<Testimonial>;
    async fn reorder(&self, positions: &[SortPosition]) -> DomainResult<()>;
    async fn bulk_apply(
        &self,
        ids: &[i64],
        action: TestimonialBulkAction,
        service_id: Option<i64>,
    ) -> DomainResult<u64>;
    async fn stats(&self) -> DomainResult<TestimonialStats>;
}

/// Mean rating or `None` for an empty slice.
pub fn average_rating(testimonials: &[Testimonial]) -> Option<f64> {
    if testimonials.is_empty() {
        return None;
    }
    let sum: f64 = testimonials
        .iter()
        .map(|t| f64::from(t.rating.value()))
        .sum();
    let count = u32::try_from(testimonials.len()).unwrap_or(u32::MAX);
    Some(sum / f64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_rating(rating: i16) -> Testimonial {
        Testimonial {
            id: 1,
            client_name: "Client".into(),
            company: None,
            position: None,
            testimonial: "Great".into(),
            rating: Rating::new(rating).unwrap(),
            photo_url: None,
            service_id: None,
            is_featured: false,
            is_approved: true,
            sort_order: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(5).unwrap().value(), 5);
    }

    #[test]
    fn average_of_ratings() {
        assert_eq!(average_rating(&[]), None);
        let items = vec![with_rating(5), with_rating(4), with_rating(3)];
        assert_eq!(average_rating(&items), Some(4.0));
    }
}
