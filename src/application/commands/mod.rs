// src/application/commands/mod.rs
pub mod contact_messages;
pub mod faq_categories;
pub mod faqs;
pub mod hosting_plans;
pub mod hosting_types;
pub mod partners;
pub mod patch;
pub mod plan_features;
pub mod portfolio;
pub mod service_cards;
pub mod service_categories;
pub mod services;
pub mod site_settings;
pub mod team_members;
pub mod testimonials;
pub mod users;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        common::SortPosition,
        errors::{DomainError, DomainResult},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One `{id, sort_order}` entry of a reorder body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema)]
pub struct SortOrderInput {
    pub id: i64,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: i32,
}

impl From<SortOrderInput> for SortPosition {
    fn from(value: SortOrderInput) -> Self {
        Self {
            id: value.id,
            sort_order: value.sort_order,
        }
    }
}

/// Reports a domain validation failure against a single request field.
pub(crate) fn on_field<T>(result: DomainResult<T>, field: &str) -> ApplicationResult<T> {
    result.map_err(|err| match err {
        DomainError::Validation(message) => ApplicationError::field(field, message),
        other => other.into(),
    })
}

pub(crate) fn exists_message(field: &str) -> String {
    format!("The selected {} is invalid.", field.replace('_', " "))
}

/// Per-item length check for JSON string arrays such as skills or technologies.
pub(crate) fn check_string_items(
    errors: &mut crate::application::validation::FieldErrors,
    field: &str,
    items: Option<&[String]>,
    max: usize,
) {
    for (index, item) in items.unwrap_or_default().iter().enumerate() {
        if item.chars().count() > max {
            errors.add(
                &format!("{field}.{index}"),
                format!("The {field}.{index} may not be greater than {max} characters."),
            );
        }
    }
}
