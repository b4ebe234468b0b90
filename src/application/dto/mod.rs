// src/application/dto/mod.rs
pub mod auth;
pub mod common;
pub mod contact_messages;
pub mod faq_categories;
pub mod faqs;
pub mod hosting_plans;
pub mod hosting_types;
pub mod pagination;
pub mod partners;
pub mod plan_features;
pub mod portfolio;
pub mod service_cards;
pub mod service_categories;
pub mod services;
pub mod site_settings;
pub mod team_members;
pub mod testimonials;
pub mod users;

pub use auth::{AuthSessionDto, AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use common::{AffectedDto, CategorySummaryDto};
pub use contact_messages::{ContactExportDto, ContactMessageDto, ContactStatsDto};
pub use faq_categories::FaqCategoryDto;
pub use faqs::FaqDto;
pub use hosting_plans::HostingPlanDto;
pub use hosting_types::HostingTypeDto;
pub use pagination::PageDto;
pub use partners::PartnerDto;
pub use plan_features::PlanFeatureDto;
pub use portfolio::PortfolioDto;
pub use service_cards::ServiceCardDto;
pub use service_categories::ServiceCategoryDto;
pub use services::ServiceDto;
pub use site_settings::SiteSettingDto;
pub use team_members::TeamMemberDto;
pub use testimonials::{ServiceTestimonialsDto, TestimonialDto, TestimonialStatsDto};
pub use users::UserDto;
