// src/application/queries/mod.rs
pub mod contact_messages;
pub mod faq_categories;
pub mod faqs;
pub mod flag;
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

/// Path segment that addresses a record by numeric id or by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Id(i64),
    Slug(String),
}

impl Lookup {
    pub fn parse(segment: &str) -> Self {
        segment
            .parse::<i64>()
            .map_or_else(|_| Self::Slug(segment.to_string()), Self::Id)
    }
}

/// Trims a free-text filter and drops it when blank.
pub(crate) fn search_term(raw: Option<String>) -> Option<String> {
    raw.map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_are_ids() {
        assert_eq!(Lookup::parse("42"), Lookup::Id(42));
        assert_eq!(
            Lookup::parse("web-development"),
            Lookup::Slug("web-development".into())
        );
        assert_eq!(Lookup::parse("2024-plan"), Lookup::Slug("2024-plan".into()));
    }

    #[test]
    fn blank_search_is_ignored() {
        assert_eq!(search_term(Some("   ".into())), None);
        assert_eq!(search_term(Some(" seo ".into())), Some("seo".into()));
    }
}
