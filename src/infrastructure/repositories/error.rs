use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_SERVICE_CATEGORY_SLUG: &str = "service_categories_slug_key";
const CNT_SERVICE_SLUG: &str = "services_slug_key";
const CNT_HOSTING_PLAN_SLUG: &str = "hosting_plans_slug_key";
const CNT_PORTFOLIO_SLUG: &str = "portfolio_slug_key";
const CNT_SETTING_KEY: &str = "site_settings_setting_key_key";
const CNT_SERVICE_CATEGORY: &str = "services_category_id_fkey";
const CNT_HOSTING_PLAN_CATEGORY: &str = "hosting_plans_category_id_fkey";
const CNT_PLAN_FEATURE_PLAN: &str = "plan_features_plan_id_fkey";
const CNT_FAQ_CATEGORY: &str = "faqs_category_id_fkey";
const CNT_PORTFOLIO_SERVICE: &str = "portfolio_service_id_fkey";
const CNT_TESTIMONIAL_SERVICE: &str = "testimonials_service_id_fkey";
const CNT_TESTIMONIAL_RATING: &str = "testimonials_rating_chk";
const CNT_HOSTING_PLAN_PRICES: &str = "hosting_plans_prices_chk";

const SQLSTATE_UNIQUE: &str = "23505";
const SQLSTATE_FOREIGN_KEY: &str = "23503";
const SQLSTATE_CHECK: &str = "23514";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                match constraint {
                    CNT_USER_EMAIL => {
                        return DomainError::Conflict("email already registered".into());
                    }
                    CNT_SERVICE_CATEGORY_SLUG | CNT_SERVICE_SLUG | CNT_HOSTING_PLAN_SLUG
                    | CNT_PORTFOLIO_SLUG => {
                        return DomainError::Conflict("slug already exists".into());
                    }
                    CNT_SETTING_KEY => {
                        return DomainError::Conflict("setting key already exists".into());
                    }
                    CNT_SERVICE_CATEGORY | CNT_HOSTING_PLAN_CATEGORY => {
                        return DomainError::not_found("service category");
                    }
                    CNT_PLAN_FEATURE_PLAN => return DomainError::not_found("hosting plan"),
                    CNT_FAQ_CATEGORY => return DomainError::not_found("FAQ category"),
                    CNT_PORTFOLIO_SERVICE | CNT_TESTIMONIAL_SERVICE => {
                        return DomainError::not_found("service");
                    }
                    CNT_TESTIMONIAL_RATING => {
                        return DomainError::Validation("rating must be between 1 and 5".into());
                    }
                    CNT_HOSTING_PLAN_PRICES => {
                        return DomainError::Validation("prices must be zero or greater".into());
                    }
                    _ => {}
                }
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    SQLSTATE_UNIQUE => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    SQLSTATE_FOREIGN_KEY => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    SQLSTATE_CHECK => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Delete-side mapping: a restricting foreign key means the row is still referenced.
pub fn map_sqlx_delete(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some(SQLSTATE_FOREIGN_KEY)
    {
        return DomainError::Conflict("record is still referenced by other records".into());
    }
    map_sqlx(err)
}
