// src/infrastructure/repositories/postgres_hosting_plan.rs
use super::{map_sqlx, sql};
use crate::domain::{
    errors::{DomainError, DomainResult},
    hosting_plan::{
        HostingPlan, HostingPlanChanges, HostingPlanFilter, HostingPlanFlag, HostingPlanRepository,
        NewHostingPlan, PlanPricing,
    },
    service_category::CategorySummary,
    slug::{Slug, SlugLookup},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const SELECT: &str = "SELECT p.id, p.name, p.slug, p.description, p.logo_url, p.category_id,
        p.monthly_price::float8 AS monthly_price, p.yearly_price::float8 AS yearly_price,
        p.monthly_renewal_price::float8 AS monthly_renewal_price,
        p.yearly_renewal_price::float8 AS yearly_renewal_price,
        p.is_highlighted, p.is_popular, p.is_active, p.sort_order, p.created_at, p.updated_at,
        c.name AS category_name, c.slug AS category_slug
    FROM hosting_plans p
    LEFT JOIN service_categories c ON c.id = p.category_id";

#[derive(Clone)]
pub struct PostgresHostingPlanRepository {
    pool: PgPool,
}

impl PostgresHostingPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn reload(&self, id: i64) -> DomainResult<HostingPlan> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("hosting plan"))
    }
}

#[derive(Debug, FromRow)]
struct HostingPlanRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    logo_url: Option<String>,
    category_id: i64,
    monthly_price: f64,
    yearly_price: f64,
    monthly_renewal_price: f64,
    yearly_renewal_price: f64,
    is_highlighted: bool,
    is_popular: bool,
    is_active: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_name: Option<String>,
    category_slug: Option<String>,
}

impl TryFrom<HostingPlanRow> for HostingPlan {
    type Error = DomainError;

    fn try_from(row: HostingPlanRow) -> Result<Self, Self::Error> {
        let category = row
            .category_name
            .zip(row.category_slug)
            .map(|(name, slug)| CategorySummary {
                id: row.category_id,
                name,
                slug,
            });
        Ok(HostingPlan {
            id: row.id,
            name: row.name,
            slug: Slug::new(row.slug)?,
            description: row.description,
            logo_url: row.logo_url,
            category_id: row.category_id,
            category,
            pricing: PlanPricing {
                monthly: row.monthly_price,
                yearly: row.yearly_price,
                monthly_renewal: row.monthly_renewal_price,
                yearly_renewal: row.yearly_renewal_price,
            },
            is_highlighted: row.is_highlighted,
            is_popular: row.is_popular,
            is_active: row.is_active,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugLookup for PostgresHostingPlanRepository {
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        sql::slug_exists(&self.pool, "hosting_plans", slug, exclude_id).await
    }
}

#[async_trait]
impl HostingPlanRepository for PostgresHostingPlanRepository {
    async fn list(&self, filter: &HostingPlanFilter) -> DomainResult<Vec<HostingPlan>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT);
        let mut predicates = sql::Predicates::default();
        predicates.eq(&mut builder, "p.is_active", filter.active);
        predicates.eq(&mut builder, "p.category_id", filter.category_id);
        predicates.eq(&mut builder, "p.is_highlighted", filter.highlighted);
        predicates.eq(&mut builder, "p.is_popular", filter.popular);
        builder.push(" ORDER BY p.sort_order, p.name");

        let rows = builder
            .build_query_as::<HostingPlanRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(HostingPlan::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<HostingPlan>> {
        let row = sqlx::query_as::<_, HostingPlanRow>(&format!("{SELECT} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(HostingPlan::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<HostingPlan>> {
        let row = sqlx::query_as::<_, HostingPlanRow>(&format!("{SELECT} WHERE p.slug = $1"))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(HostingPlan::try_from).transpose()
    }

    async fn insert(&self, plan: NewHostingPlan) -> DomainResult<HostingPlan> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO hosting_plans
                (name, slug, description, logo_url, category_id, monthly_price, yearly_price,
                 monthly_renewal_price, yearly_renewal_price, is_highlighted, is_popular,
                 is_active, sort_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $14)
             RETURNING id",
        )
        .bind(plan.name)
        .bind(String::from(plan.slug))
        .bind(plan.description)
        .bind(plan.logo_url)
        .bind(plan.category_id)
        .bind(plan.pricing.monthly)
        .bind(plan.pricing.yearly)
        .bind(plan.pricing.monthly_renewal)
        .bind(plan.pricing.yearly_renewal)
        .bind(plan.is_highlighted)
        .bind(plan.is_popular)
        .bind(plan.is_active)
        .bind(plan.sort_order)
        .bind(plan.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        self.reload(id).await
    }

    async fn update(&self, id: i64, changes: HostingPlanChanges) -> DomainResult<HostingPlan> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE hosting_plans SET updated_at = ");
        builder.push_bind(changes.updated_at);
        sql::set(&mut builder, "name", changes.name);
        sql::set(&mut builder, "slug", changes.slug.map(String::from));
        sql::set(&mut builder, "description", changes.description);
        sql::set(&mut builder, "logo_url", changes.logo_url);
        sql::set(&mut builder, "category_id", changes.category_id);
        sql::set(&mut builder, "monthly_price", changes.monthly_price);
        sql::set(&mut builder, "yearly_price", changes.yearly_price);
        sql::set(&mut builder, "monthly_renewal_price", changes.monthly_renewal_price);
        sql::set(&mut builder, "yearly_renewal_price", changes.yearly_renewal_price);
        sql::set(&mut builder, "is_highlighted", changes.is_highlighted);
        sql::set(&mut builder, "is_popular", changes.is_popular);
        sql::set(&mut builder, "is_active", changes.is_active);
        sql::set(&mut builder, "sort_order", changes.sort_order);
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("hosting plan"));
        }
        self.reload(id).await
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "hosting_plans", id, "hosting plan").await
    }

    async fn toggle(
        &self,
        id: i64,
        flag: HostingPlanFlag,
        at: DateTime<Utc>,
    ) -> DomainResult<HostingPlan> {
        let column = flag.column();
        let result = sqlx::query(&format!(
            "UPDATE hosting_plans SET {column} = NOT {column}, updated_at = $1 WHERE id = $2"
        ))
        .bind(at)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("hosting plan"));
        }
        self.reload(id).await
    }
}
