// src/infrastructure/repositories/sql.rs
//! Small builders shared by the Postgres repositories.
use crate::domain::{common::SortPosition, errors::DomainResult, slug::Slug};
use sqlx::{Encode, PgPool, Postgres, QueryBuilder, Type};

use super::map_sqlx;

/// Emits `WHERE` before the first predicate and `AND` before the rest.
#[derive(Debug, Default)]
pub(super) struct Predicates {
    started: bool,
}

impl Predicates {
    pub(super) fn next(&mut self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder.push(if self.started { " AND " } else { " WHERE " });
        self.started = true;
    }

    pub(super) fn eq<'a, T>(
        &mut self,
        builder: &mut QueryBuilder<'a, Postgres>,
        column: &str,
        value: Option<T>,
    ) where
        T: 'a + Encode<'a, Postgres> + Type<Postgres>,
    {
        if let Some(value) = value {
            self.next(builder);
            builder.push(column).push(" = ").push_bind(value);
        }
    }

    /// `(a ILIKE $p OR b ILIKE $p ...)` over `columns`.
    pub(super) fn search(
        &mut self,
        builder: &mut QueryBuilder<'_, Postgres>,
        columns: &[&str],
        term: Option<&str>,
    ) {
        let Some(term) = term else { return };
        let pattern = like_pattern(term);
        self.next(builder);
        builder.push("(");
        for (index, column) in columns.iter().enumerate() {
            if index > 0 {
                builder.push(" OR ");
            }
            builder.push(*column).push(" ILIKE ").push_bind(pattern.clone());
        }
        builder.push(")");
    }
}

/// Appends `, column = $n` when `value` is present.
pub(super) fn set<'a, T>(builder: &mut QueryBuilder<'a, Postgres>, column: &str, value: Option<T>)
where
    T: 'a + Encode<'a, Postgres> + Type<Postgres>,
{
    if let Some(value) = value {
        builder.push(", ").push(column).push(" = ").push_bind(value);
    }
}

/// `%term%` with LIKE metacharacters escaped.
pub(super) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

pub(super) fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

pub(super) async fn slug_exists(
    pool: &PgPool,
    table: &str,
    slug: &Slug,
    exclude_id: Option<i64>,
) -> DomainResult<bool> {
    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE slug = "));
    builder.push_bind(slug.as_str().to_string());
    if let Some(id) = exclude_id {
        builder.push(" AND id <> ").push_bind(id);
    }
    builder.push(")");
    builder
        .build_query_scalar::<bool>()
        .fetch_one(pool)
        .await
        .map_err(map_sqlx)
}

/// Writes every `sort_order` in one transaction.
pub(super) async fn reorder(
    pool: &PgPool,
    table: &str,
    positions: &[SortPosition],
    touch_updated_at: Option<chrono::DateTime<chrono::Utc>>,
) -> DomainResult<()> {
    let mut tx = pool.begin().await.map_err(map_sqlx)?;
    for position in positions {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("UPDATE {table} SET sort_order = "));
        builder.push_bind(position.sort_order);
        if let Some(at) = touch_updated_at {
            builder.push(", updated_at = ").push_bind(at);
        }
        builder.push(" WHERE id = ").push_bind(position.id);
        builder
            .build()
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
    }
    tx.commit().await.map_err(map_sqlx)
}

pub(super) async fn delete_by_id(
    pool: &PgPool,
    table: &str,
    id: i64,
    entity: &str,
) -> DomainResult<()> {
    let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1"))
        .bind(id)
        .execute(pool)
        .await
        .map_err(super::map_sqlx_delete)?;
    if result.rows_affected() == 0 {
        return Err(crate::domain::errors::DomainError::not_found(entity));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(like_pattern("seo"), "%seo%");
        assert_eq!(like_pattern("100%_off"), "%100\\%\\_off%");
    }

    #[test]
    fn predicates_join_with_and() {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM faqs");
        let mut predicates = Predicates::default();
        predicates.eq(&mut builder, "is_active", Some(true));
        predicates.eq::<i64>(&mut builder, "category_id", None);
        predicates.search(&mut builder, &["question", "answer"], Some("x"));
        assert_eq!(
            builder.sql(),
            "SELECT * FROM faqs WHERE is_active = $1 AND (question ILIKE $2 OR answer ILIKE $3)"
        );
    }
}
