// src/infrastructure/repositories/postgres_service_category.rs
use super::{map_sqlx, sql};
use crate::domain::{
    errors::{DomainError, DomainResult},
    service_category::{
        NewServiceCategory, ServiceCategory, ServiceCategoryChanges, ServiceCategoryFilter,
        ServiceCategoryRepository,
    },
    slug::{Slug, SlugLookup},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str =
    "id, name, slug, description, icon, sort_order, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresServiceCategoryRepository {
    pool: PgPool,
}

impl PostgresServiceCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ServiceCategoryRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    icon: Option<String>,
    sort_order: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ServiceCategoryRow> for ServiceCategory {
    type Error = DomainError;

    fn try_from(row: ServiceCategoryRow) -> Result<Self, Self::Error> {
        Ok(ServiceCategory {
            id: row.id,
            name: row.name,
            slug: Slug::new(row.slug)?,
            description: row.description,
            icon: row.icon,
            sort_order: row.sort_order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugLookup for PostgresServiceCategoryRepository {
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        sql::slug_exists(&self.pool, "service_categories", slug, exclude_id).await
    }
}

#[async_trait]
impl ServiceCategoryRepository for PostgresServiceCategoryRepository {
    async fn list(&self, filter: &ServiceCategoryFilter) -> DomainResult<Vec<ServiceCategory>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM service_categories"));
        let mut predicates = sql::Predicates::default();
        predicates.eq(&mut builder, "is_active", filter.active);
        builder.push(" ORDER BY sort_order, name");

        let rows = builder
            .build_query_as::<ServiceCategoryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(ServiceCategory::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ServiceCategory>> {
        let row = sqlx::query_as::<_, ServiceCategoryRow>(&format!(
            "SELECT {COLUMNS} FROM service_categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(ServiceCategory::try_from).transpose()
    }

    async fn insert(&self, category: NewServiceCategory) -> DomainResult<ServiceCategory> {
        let row = sqlx::query_as::<_, ServiceCategoryRow>(&format!(
            "INSERT INTO service_categories
                (name, slug, description, icon, sort_order, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {COLUMNS}"
        ))
        .bind(category.name)
        .bind(String::from(category.slug))
        .bind(category.description)
        .bind(category.icon)
        .bind(category.sort_order)
        .bind(category.is_active)
        .bind(category.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        ServiceCategory::try_from(row)
    }

    async fn update(
        &self,
        id: i64,
        changes: ServiceCategoryChanges,
    ) -> DomainResult<ServiceCategory> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE service_categories SET updated_at = ");
        builder.push_bind(changes.updated_at);
        sql::set(&mut builder, "name", changes.name);
        sql::set(&mut builder, "slug", changes.slug.map(String::from));
        sql::set(&mut builder, "description", changes.description);
        sql::set(&mut builder, "icon", changes.icon);
        sql::set(&mut builder, "sort_order", changes.sort_order);
        sql::set(&mut builder, "is_active", changes.is_active);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<ServiceCategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("service category"))?;
        ServiceCategory::try_from(row)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "service_categories", id, "service category").await
    }

    async fn toggle_active(&self, id: i64, at: DateTime<Utc>) -> DomainResult<ServiceCategory> {
        let row = sqlx::query_as::<_, ServiceCategoryRow>(&format!(
            "UPDATE service_categories SET is_active = NOT is_active, updated_at = $1
             WHERE id = $2 RETURNING {COLUMNS}"
        ))
        .bind(at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("service category"))?;
        ServiceCategory::try_from(row)
    }

    async fn count_dependents(&self, id: i64) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT (SELECT COUNT(*) FROM services WHERE category_id = $1)
                  + (SELECT COUNT(*) FROM hosting_plans WHERE category_id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(sql::to_count(count))
    }
}
