// src/infrastructure/repositories/postgres_service.rs
use super::{map_sqlx, sql};
use crate::domain::{
    errors::{DomainError, DomainResult},
    service::{NewService, Service, ServiceChanges, ServiceFilter, ServiceRepository},
    service_category::CategorySummary,
    slug::{Slug, SlugLookup},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const SELECT: &str = "SELECT s.id, s.name, s.slug, s.description, s.category_id, s.icon,
        s.is_active, s.sort_order, s.created_at, s.updated_at,
        c.name AS category_name, c.slug AS category_slug
    FROM services s
    LEFT JOIN service_categories c ON c.id = s.category_id";

#[derive(Clone)]
pub struct PostgresServiceRepository {
    pool: PgPool,
}

impl PostgresServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_by(
        &self,
        column: &str,
        value: ServiceKey<'_>,
    ) -> DomainResult<Option<Service>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT);
        builder.push(" WHERE s.").push(column).push(" = ");
        match value {
            ServiceKey::Id(id) => builder.push_bind(id),
            ServiceKey::Slug(slug) => builder.push_bind(slug.to_string()),
        };
        let row = builder
            .build_query_as::<ServiceRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Service::try_from).transpose()
    }

    async fn reload(&self, id: i64) -> DomainResult<Service> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("service"))
    }
}

enum ServiceKey<'a> {
    Id(i64),
    Slug(&'a str),
}

#[derive(Debug, FromRow)]
struct ServiceRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    category_id: Option<i64>,
    icon: Option<String>,
    is_active: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_name: Option<String>,
    category_slug: Option<String>,
}

impl TryFrom<ServiceRow> for Service {
    type Error = DomainError;

    fn try_from(row: ServiceRow) -> Result<Self, Self::Error> {
        let category = match (row.category_id, row.category_name, row.category_slug) {
            (Some(id), Some(name), Some(slug)) => Some(CategorySummary { id, name, slug }),
            _ => None,
        };
        Ok(Service {
            id: row.id,
            name: row.name,
            slug: Slug::new(row.slug)?,
            description: row.description,
            category_id: row.category_id,
            category,
            icon: row.icon,
            is_active: row.is_active,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugLookup for PostgresServiceRepository {
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        sql::slug_exists(&self.pool, "services", slug, exclude_id).await
    }
}

#[async_trait]
impl ServiceRepository for PostgresServiceRepository {
    async fn list(&self, filter: &ServiceFilter) -> DomainResult<Vec<Service>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT);
        let mut predicates = sql::Predicates::default();
        predicates.eq(&mut builder, "s.is_active", filter.active);
        predicates.eq(&mut builder, "s.category_id", filter.category_id);
        predicates.search(
            &mut builder,
            &["s.name", "s.description"],
            filter.search.as_deref(),
        );
        builder.push(" ORDER BY s.sort_order, s.name");

        let rows = builder
            .build_query_as::<ServiceRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Service::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Service>> {
        self.fetch_one_by("id", ServiceKey::Id(id)).await
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Service>> {
        self.fetch_one_by("slug", ServiceKey::Slug(slug)).await
    }

    async fn insert(&self, service: NewService) -> DomainResult<Service> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO services
                (name, slug, description, category_id, icon, is_active, sort_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING id",
        )
        .bind(service.name)
        .bind(String::from(service.slug))
        .bind(service.description)
        .bind(service.category_id)
        .bind(service.icon)
        .bind(service.is_active)
        .bind(service.sort_order)
        .bind(service.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        self.reload(id).await
    }

    async fn update(&self, id: i64, changes: ServiceChanges) -> DomainResult<Service> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE services SET updated_at = ");
        builder.push_bind(changes.updated_at);
        sql::set(&mut builder, "name", changes.name);
        sql::set(&mut builder, "slug", changes.slug.map(String::from));
        sql::set(&mut builder, "description", changes.description);
        sql::set(&mut builder, "category_id", changes.category_id);
        sql::set(&mut builder, "icon", changes.icon);
        sql::set(&mut builder, "is_active", changes.is_active);
        sql::set(&mut builder, "sort_order", changes.sort_order);
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("service"));
        }
        self.reload(id).await
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "services", id, "service").await
    }

    async fn toggle_active(&self, id: i64, at: DateTime<Utc>) -> DomainResult<Service> {
        let result = sqlx::query(
            "UPDATE services SET is_active = NOT is_active, updated_at = $1 WHERE id = $2",
        )
        .bind(at)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("service"));
        }
        self.reload(id).await
    }
}
