// src/infrastructure/repositories/postgres_faq_category.rs
use super::{map_sqlx, sql};
use crate::domain::{
    common::SortPosition,
    errors::{DomainError, DomainResult},
    faq_category::{
        FaqCategory, FaqCategoryChanges, FaqCategoryFilter, FaqCategoryRepository, NewFaqCategory,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, name, description, sort_order, is_active, created_at";

#[derive(Clone)]
pub struct PostgresFaqCategoryRepository {
    pool: PgPool,
}

impl PostgresFaqCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FaqCategoryRow {
    id: i64,
    name: String,
    description: Option<String>,
    sort_order: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<FaqCategoryRow> for FaqCategory {
    fn from(row: FaqCategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            sort_order: row.sort_order,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl FaqCategoryRepository for PostgresFaqCategoryRepository {
    async fn list(&self, filter: &FaqCategoryFilter) -> DomainResult<Vec<FaqCategory>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM faq_categories"));
        let mut predicates = sql::Predicates::default();
        predicates.eq(&mut builder, "is_active", filter.active);
        predicates.search(&mut builder, &["name", "description"], filter.search.as_deref());
        builder.push(" ORDER BY sort_order, name");

        let rows = builder
            .build_query_as::<FaqCategoryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<FaqCategory>> {
        let row = sqlx::query_as::<_, FaqCategoryRow>(&format!(
            "SELECT {COLUMNS} FROM faq_categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.map(Into::into))
    }

    async fn name_taken(&self, name: &str, exclude_id: Option<i64>) -> DomainResult<bool> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT EXISTS(SELECT 1 FROM faq_categories WHERE name = ");
        builder.push_bind(name.to_string());
        if let Some(id) = exclude_id {
            builder.push(" AND id <> ").push_bind(id);
        }
        builder.push(")");
        builder
            .build_query_scalar::<bool>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn insert(&self, category: NewFaqCategory) -> DomainResult<FaqCategory> {
        let row = sqlx::query_as::<_, FaqCategoryRow>(&format!(
            "INSERT INTO faq_categories (name, description, sort_order, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(category.name)
        .bind(category.description)
        .bind(category.sort_order)
        .bind(category.is_active)
        .bind(category.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, changes: FaqCategoryChanges) -> DomainResult<FaqCategory> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE faq_categories SET id = id");
        sql::set(&mut builder, "name", changes.name);
        sql::set(&mut builder, "description", changes.description);
        sql::set(&mut builder, "sort_order", changes.sort_order);
        sql::set(&mut builder, "is_active", changes.is_active);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<FaqCategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("FAQ category"))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "faq_categories", id, "FAQ category").await
    }

    async fn toggle_active(&self, id: i64) -> DomainResult<FaqCategory> {
        let row = sqlx::query_as::<_, FaqCategoryRow>(&format!(
            "UPDATE faq_categories SET is_active = NOT is_active WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("FAQ category"))?;
        Ok(row.into())
    }

    async fn reorder(&self, positions: &[SortPosition]) -> DomainResult<()> {
        sql::reorder(&self.pool, "faq_categories", positions, None).await
    }
}
