// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_contact_message;
mod postgres_faq;
mod postgres_faq_category;
mod postgres_hosting_plan;
mod postgres_hosting_type;
mod postgres_partner;
mod postgres_plan_feature;
mod postgres_portfolio;
mod postgres_revoked_token;
mod postgres_service;
mod postgres_service_card;
mod postgres_service_category;
mod postgres_site_setting;
mod postgres_team_member;
mod postgres_testimonial;
mod postgres_user;
mod sql;

pub use error::{map_sqlx, map_sqlx_delete};
pub use postgres_contact_message::PostgresContactMessageRepository;
pub use postgres_faq::PostgresFaqRepository;
pub use postgres_faq_category::PostgresFaqCategoryRepository;
pub use postgres_hosting_plan::PostgresHostingPlanRepository;
pub use postgres_hosting_type::PostgresHostingTypeRepository;
pub use postgres_partner::PostgresPartnerRepository;
pub use postgres_plan_feature::PostgresPlanFeatureRepository;
pub use postgres_portfolio::PostgresPortfolioRepository;
pub use postgres_revoked_token::PostgresTokenRevocationStore;
pub use postgres_service::PostgresServiceRepository;
pub use postgres_service_card::PostgresServiceCardRepository;
pub use postgres_service_category::PostgresServiceCategoryRepository;
pub use postgres_site_setting::PostgresSiteSettingRepository;
pub use postgres_team_member::PostgresTeamMemberRepository;
pub use postgres_testimonial::PostgresTestimonialRepository;
pub use postgres_user::PostgresUserRepository;

use crate::application::services::RepositorySet;
use sqlx::PgPool;
use std::sync::Arc;

/// Every repository backed by the one pool.
pub fn postgres_repositories(pool: &PgPool) -> RepositorySet {
    RepositorySet {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        service_categories: Arc::new(PostgresServiceCategoryRepository::new(pool.clone())),
        services: Arc::new(PostgresServiceRepository::new(pool.clone())),
        hosting_plans: Arc::new(PostgresHostingPlanRepository::new(pool.clone())),
        plan_features: Arc::new(PostgresPlanFeatureRepository::new(pool.clone())),
        portfolio: Arc::new(PostgresPortfolioRepository::new(pool.clone())),
        team_members: Arc::new(PostgresTeamMemberRepository::new(pool.clone())),
        faq_categories: Arc::new(PostgresFaqCategoryRepository::new(pool.clone())),
        faqs: Arc::new(PostgresFaqRepository::new(pool.clone())),
        contact_messages: Arc::new(PostgresContactMessageRepository::new(pool.clone())),
        testimonials: Arc::new(PostgresTestimonialRepository::new(pool.clone())),
        partners: Arc::new(PostgresPartnerRepository::new(pool.clone())),
        service_cards: Arc::new(PostgresServiceCardRepository::new(pool.clone())),
        hosting_types: Arc::new(PostgresHostingTypeRepository::new(pool.clone())),
        site_settings: Arc::new(PostgresSiteSettingRepository::new(pool.clone())),
    }
}
