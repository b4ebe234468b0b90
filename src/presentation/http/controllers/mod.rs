// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod contact_messages;
pub mod faq_categories;
pub mod faqs;
pub mod hosting_plans;
pub mod hosting_types;
pub mod partners;
pub mod plan_features;
pub mod portfolio;
pub mod service_cards;
pub mod service_categories;
pub mod services;
pub mod site_settings;
pub mod team_members;
pub mod testimonials;
