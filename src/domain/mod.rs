pub mod common;
pub mod contact_message;
pub mod errors;
pub mod faq;
pub mod faq_category;
pub mod hosting_plan;
pub mod hosting_type;
pub mod partner;
pub mod plan_feature;
pub mod portfolio;
pub mod service;
pub mod service_card;
pub mod service_category;
pub mod site_setting;
pub mod slug;
pub mod team_member;
pub mod testimonial;
pub mod user;
