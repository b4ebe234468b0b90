// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::{fmt, sync::Arc};

/// URL-safe identifier: lowercase ASCII letters and digits separated by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_url_safe(&value) {
            return Err(DomainError::Validation(format!(
                "slug '{value}' may only contain lowercase letters, digits and single hyphens"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn with_suffix(base: &Self, counter: u64) -> Self {
        Self(format!("{}-{counter}", base.0))
    }
}

fn is_url_safe(value: &str) -> bool {
    !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Existence check over the slug column of one table.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool>;
}

/// Produces table-unique slugs from display names.
///
/// Collisions are resolved by a sequential scan: `base`, `base-1`, `base-2`, ...
/// The row being updated is excluded from the existence check so an entity
/// never collides with itself.
pub struct SlugAssigner {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugAssigner {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Slug for a new row. An explicit non-empty `requested` slug wins over the name.
    pub async fn assign<L>(
        &self,
        lookup: &L,
        name: &str,
        requested: Option<&str>,
        fallback: &str,
    ) -> DomainResult<Slug>
    where
        L: SlugLookup + ?Sized,
    {
        let base = match explicit(requested) {
            Some(slug) => Slug::new(slug)?,
            None => self.derive(name, fallback)?,
        };
        self.resolve_unique(lookup, base, None).await
    }

    /// Slug for an existing row after a write.
    ///
    /// An explicit slug is honoured (and deduplicated). Without one, the slug is
    /// re-derived only when the name actually changes; otherwise the current slug is kept.
    #[allow(clippy::too_many_arguments)]
    pub async fn reassign<L>(
        &self,
        lookup: &L,
        id: i64,
        current_slug: &Slug,
        current_name: &str,
        new_name: Option<&str>,
        requested: Option<&str>,
        fallback: &str,
    ) -> DomainResult<Slug>
    where
        L: SlugLookup + ?Sized,
    {
        if let Some(slug) = explicit(requested) {
            let base = Slug::new(slug)?;
            return self.resolve_unique(lookup, base, Some(id)).await;
        }

        match new_name {
            Some(name) if name != current_name => {
                let base = self.derive(name, fallback)?;
                self.resolve_unique(lookup, base, Some(id)).await
            }
            _ => Ok(current_slug.clone()),
        }
    }

    fn derive(&self, name: &str, fallback: &str) -> DomainResult<Slug> {
        let derived = self.generator.slugify(name);
        if derived.is_empty() {
            Slug::new(fallback)
        } else {
            Slug::new(derived)
        }
    }

    async fn resolve_unique<L>(
        &self,
        lookup: &L,
        base: Slug,
        exclude_id: Option<i64>,
    ) -> DomainResult<Slug>
    where
        L: SlugLookup + ?Sized,
    {
        if !lookup.slug_exists(&base, exclude_id).await? {
            return Ok(base);
        }

        let mut counter = 1u64;
        loop {
            let candidate = Slug::with_suffix(&base, counter);
            if !lookup.slug_exists(&candidate, exclude_id).await? {
                return Ok(candidate);
            }
            counter += 1;
        }
    }
}

fn explicit(requested: Option<&str>) -> Option<&str> {
    requested.map(str::trim).filter(|slug| !slug.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct Slugify;

    impl SlugGenerator for Slugify {
        fn slugify(&self, input: &str) -> String {
            slug::slugify(input)
        }
    }

    #[derive(Default)]
    struct Table {
        rows: Mutex<HashMap<i64, String>>,
    }

    impl Table {
        fn with(rows: &[(i64, &str)]) -> Self {
            let table = Self::default();
            {
                let mut map = table.rows.lock().unwrap();
                for (id, slug) in rows {
                    map.insert(*id, (*slug).to_string());
                }
            }
            table
        }

        fn push(&self, id: i64, slug: &Slug) {
            self.rows.lock().unwrap().insert(id, slug.to_string());
        }
    }

    #[async_trait]
    impl SlugLookup for Table {
        async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .any(|(id, existing)| existing == slug.as_str() && Some(*id) != exclude_id))
        }
    }

    fn assigner() -> SlugAssigner {
        SlugAssigner::new(Arc::new(Slugify))
    }

    #[tokio::test]
    async fn derives_lowercase_hyphenated_slug() {
        let table = Table::default();
        let slug = assigner()
            .assign(&table, "  Cloud & VPS -- Hosting!! 2024 ", None, "service")
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "cloud-vps-hosting-2024");
    }

    #[tokio::test]
    async fn duplicate_names_receive_sequential_suffixes() {
        let table = Table::default();
        let assigner = assigner();

        let mut produced = Vec::new();
        for id in 1..=3 {
            let slug = assigner
                .assign(&table, "Web Development", None, "service")
                .await
                .unwrap();
            table.push(id, &slug);
            produced.push(slug.to_string());
        }

        assert_eq!(
            produced,
            vec!["web-development", "web-development-1", "web-development-2"]
        );
    }

    #[tokio::test]
    async fn suffix_scan_skips_taken_numbers() {
        let table = Table::with(&[(1, "seo"), (2, "seo-1"), (3, "seo-3")]);
        let slug = assigner().assign(&table, "SEO", None, "service").await.unwrap();
        assert_eq!(slug.as_str(), "seo-2");
    }

    #[tokio::test]
    async fn explicit_slug_is_used_verbatim_but_deduplicated() {
        let table = Table::with(&[(1, "custom")]);
        let assigner = assigner();

        let slug = assigner
            .assign(&table, "Whatever Name", Some("landing"), "service")
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "landing");

        let slug = assigner
            .assign(&table, "Whatever Name", Some("custom"), "service")
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "custom-1");
    }

    #[tokio::test]
    async fn blank_explicit_slug_falls_back_to_name() {
        let table = Table::default();
        let slug = assigner()
            .assign(&table, "Managed WordPress", Some("   "), "hosting-plan")
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "managed-wordpress");
    }

    #[tokio::test]
    async fn explicit_slug_must_be_url_safe() {
        let table = Table::default();
        let err = assigner()
            .assign(&table, "Name", Some("Not Valid"), "service")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn name_without_alphanumerics_uses_fallback() {
        let table = Table::with(&[(1, "portfolio")]);
        let slug = assigner().assign(&table, "***", None, "portfolio").await.unwrap();
        assert_eq!(slug.as_str(), "portfolio-1");
    }

    #[tokio::test]
    async fn rename_regenerates_slug() {
        let table = Table::with(&[(1, "web-design"), (2, "branding")]);
        let current = Slug::new("web-design").unwrap();
        let slug = assigner()
            .reassign(&table, 1, &current, "Web Design", Some("Branding"), None, "service")
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "branding-1");
    }

    #[tokio::test]
    async fn unchanged_name_keeps_slug() {
        let table = Table::with(&[(1, "hand-picked")]);
        let current = Slug::new("hand-picked").unwrap();
        let slug = assigner()
            .reassign(&table, 1, &current, "Web Design", Some("Web Design"), None, "service")
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "hand-picked");
    }

    #[tokio::test]
    async fn explicit_slug_wins_over_rename() {
        let table = Table::with(&[(1, "web-design")]);
        let current = Slug::new("web-design").unwrap();
        let slug = assigner()
            .reassign(
                &table,
                1,
                &current,
                "Web Design",
                Some("Something Else"),
                Some("kept-by-hand"),
                "service",
            )
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "kept-by-hand");
    }

    #[tokio::test]
    async fn updated_row_does_not_collide_with_itself() {
        let table = Table::with(&[(1, "web-design")]);
        let current = Slug::new("web-design").unwrap();
        let slug = assigner()
            .reassign(&table, 1, &current, "Web design", Some("Web Design"), None, "service")
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "web-design");
    }
}
