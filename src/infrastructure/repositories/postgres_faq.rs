// src/infrastructure/repositories/postgres_faq.rs
use super::{map_sqlx, map_sqlx_delete, sql};
use crate::domain::{
    common::SortPosition,
    errors::{DomainError, DomainResult},
    faq::{Faq, FaqBulkAction, FaqChanges, FaqCounts, FaqFilter, FaqFlag, FaqRepository, NewFaq},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const COLUMNS: &str =
    "id, category_id, question, answer, is_featured, sort_order, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresFaqRepository {
    pool: PgPool,
}

impl PostgresFaqRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FaqRow {
    id: i64,
    category_id: Option<i64>,
    question: String,
    answer: String,
    is_featured: bool,
    sort_order: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FaqRow> for Faq {
    fn from(row: FaqRow) -> Self {
        Self {
            id: row.id,
            category_id: row.category_id,
            question: row.question,
            answer: row.answer,
            is_featured: row.is_featured,
            sort_order: row.sort_order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct CountsRow {
    category_id: i64,
    total: i64,
    active: i64,
}

#[async_trait]
impl FaqRepository for PostgresFaqRepository {
    async fn list(&self, filter: &FaqFilter) -> DomainResult<Vec<Faq>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM faqs"));
        let mut predicates = sql::Predicates::default();
        predicates.eq(&mut builder, "category_id", filter.category_id);
        predicates.eq(&mut builder, "is_active", filter.active);
        predicates.eq(&mut builder, "is_featured", filter.featured);
        predicates.search(&mut builder, &["question", "answer"], filter.search.as_deref());
        if filter.visible_categories_only {
            predicates.next(&mut builder);
            builder.push(
                "(category_id IS NULL OR EXISTS (SELECT 1 FROM faq_categories c \
                 WHERE c.id = faqs.category_id AND c.is_active))",
            );
        }
        builder.push(" ORDER BY sort_order, created_at, id");

        let rows = builder
            .build_query_as::<FaqRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Faq>> {
        let row = sqlx::query_as::<_, FaqRow>(&format!("SELECT {COLUMNS} FROM faqs WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, faq: NewFaq) -> DomainResult<Faq> {
        let row = sqlx::query_as::<_, FaqRow>(&format!(
            "INSERT INTO faqs
                (category_id, question, answer, is_featured, sort_order, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7) RETURNING {COLUMNS}"
        ))
        .bind(faq.category_id)
        .bind(faq.question)
        .bind(faq.answer)
        .bind(faq.is_featured)
        .bind(faq.sort_order)
        .bind(faq.is_active)
        .bind(faq.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, changes: FaqChanges) -> DomainResult<Faq> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE faqs SET updated_at = ");
        builder.push_bind(changes.updated_at);
        sql::set(&mut builder, "category_id", changes.category_id);
        sql::set(&mut builder, "question", changes.question);
        sql::set(&mut builder, "answer", changes.answer);
        sql::set(&mut builder, "is_featured", changes.is_featured);
        sql::set(&mut builder, "sort_order", changes.sort_order);
        sql::set(&mut builder, "is_active", changes.is_active);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<FaqRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("FAQ"))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "faqs", id, "FAQ").await
    }

    async fn toggle(&self, id: i64, flag: FaqFlag, at: DateTime<Utc>) -> DomainResult<Faq> {
        let column = flag.column();
        let row = sqlx::query_as::<_, FaqRow>(&format!(
            "UPDATE faqs SET {column} = NOT {column}, updated_at = $1 WHERE id = $2 RETURNING {COLUMNS}"
        ))
        .bind(at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("FAQ"))?;
        Ok(row.into())
    }

    async fn reorder(&self, positions: &[SortPosition], at: DateTime<Utc>) -> DomainResult<()> {
        sql::reorder(&self.pool, "faqs", positions, Some(at)).await
    }

    async fn bulk_apply(
        &self,
        ids: &[i64],
        action: FaqBulkAction,
        category_id: Option<i64>,
        at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let assignment = match action {
            FaqBulkAction::Activate => "is_active = TRUE",
            FaqBulkAction::Deactivate => "is_active = FALSE",
            FaqBulkAction::Feature => "is_featured = TRUE",
            FaqBulkAction::Unfeature => "is_featured = FALSE",
            FaqBulkAction::Delete => {
                let result = sqlx::query("DELETE FROM faqs WHERE id = ANY($1)")
                    .bind(ids)
                    .execute(&self.pool)
                    .await
                    .map_err(map_sqlx_delete)?;
                return Ok(result.rows_affected());
            }
        };

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE faqs SET updated_at = ");
        builder.push_bind(at);
        builder.push(", ").push(assignment);
        sql::set(&mut builder, "category_id", category_id);
        builder.push(" WHERE id = ANY(").push_bind(ids.to_vec()).push(")");
        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn count_in_category(&self, category_id: i64) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM faqs WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(sql::to_count(count))
    }

    async fn counts_by_category(&self) -> DomainResult<HashMap<i64, FaqCounts>> {
        let rows = sqlx::query_as::<_, CountsRow>(
            "SELECT category_id, COUNT(*) AS total, COUNT(*) FILTER (WHERE is_active) AS active
             FROM faqs WHERE category_id IS NOT NULL GROUP BY category_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    row.category_id,
                    FaqCounts {
                        total: sql::to_count(row.total),
                        active: sql::to_count(row.active),
                    },
                )
            })
            .collect())
    }
}
