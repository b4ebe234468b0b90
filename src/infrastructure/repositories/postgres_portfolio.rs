// src/infrastructure/repositories/postgres_portfolio.rs
use super::{map_sqlx, sql};
use crate::domain::{
    common::{Page, PageRequest},
    errors::{DomainError, DomainResult},
    portfolio::{
        NewPortfolioItem, PortfolioChanges, PortfolioFilter, PortfolioFlag, PortfolioItem,
        PortfolioRepository,
    },
    slug::{Slug, SlugLookup},
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};

const COLUMNS: &str = "id, title, slug, description, client_name, project_url, featured_image,
    gallery_images, service_id, technologies_used, project_date, is_featured, is_published,
    created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPortfolioRepository {
    pool: PgPool,
}

impl PostgresPortfolioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PortfolioRow {
    id: i64,
    title: String,
    slug: String,
    description: Option<String>,
    client_name: Option<String>,
    project_url: Option<String>,
    featured_image: Option<String>,
    gallery_images: Json<Vec<String>>,
    service_id: Option<i64>,
    technologies_used: Json<Vec<String>>,
    project_date: Option<NaiveDate>,
    is_featured: bool,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PortfolioRow> for PortfolioItem {
    type Error = DomainError;

    fn try_from(row: PortfolioRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            title: row.title,
            slug: Slug::new(row.slug)?,
            description: row.description,
            client_name: row.client_name,
            project_url: row.project_url,
            featured_image: row.featured_image,
            gallery_images: row.gallery_images.0,
            service_id: row.service_id,
            technologies_used: row.technologies_used.0,
            project_date: row.project_date,
            is_featured: row.is_featured,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &PortfolioFilter) {
    let mut predicates = sql::Predicates::default();
    predicates.eq(builder, "is_published", filter.published);
    predicates.eq(builder, "is_featured", filter.featured);
    predicates.eq(builder, "service_id", filter.service_id);
    predicates.search(
        builder,
        &["title", "description", "client_name"],
        filter.search.as_deref(),
    );
    if let Some(year) = filter.year {
        predicates.next(builder);
        builder
            .push("EXTRACT(YEAR FROM project_date) = ")
            .push_bind(year);
    }
    if let Some(from) = filter.project_date_from {
        predicates.next(builder);
        builder.push("project_date >= ").push_bind(from);
    }
}

#[async_trait]
impl SlugLookup for PostgresPortfolioRepository {
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        sql::slug_exists(&self.pool, "portfolio", slug, exclude_id).await
    }
}

#[async_trait]
impl PortfolioRepository for PostgresPortfolioRepository {
    async fn list_page(
        &self,
        filter: &PortfolioFilter,
        page: PageRequest,
    ) -> DomainResult<Page<PortfolioItem>> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM portfolio");
        push_filters(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM portfolio"));
        push_filters(&mut builder, filter);
        builder.push(" ORDER BY project_date DESC NULLS LAST, created_at DESC, id DESC");
        builder.push(" LIMIT ").push_bind(page.limit());
        builder.push(" OFFSET ").push_bind(page.offset());

        let rows = builder
            .build_query_as::<PortfolioRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        let items = rows
            .into_iter()
            .map(PortfolioItem::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::new(items, sql::to_count(total), page))
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<PortfolioItem>> {
        let row = sqlx::query_as::<_, PortfolioRow>(&format!(
            "SELECT {COLUMNS} FROM portfolio WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(PortfolioItem::try_from).transpose()
    }

    async fn insert(&self, item: NewPortfolioItem) -> DomainResult<PortfolioItem> {
        let row = sqlx::query_as::<_, PortfolioRow>(&format!(
            "INSERT INTO portfolio
                (title, slug, description, client_name, project_url, featured_image,
                 gallery_images, service_id, technologies_used, project_date, is_featured,
                 is_published, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
             RETURNING {COLUMNS}"
        ))
        .bind(item.title)
        .bind(String::from(item.slug))
        .bind(item.description)
        .bind(item.client_name)
        .bind(item.project_url)
        .bind(item.featured_image)
        .bind(Json(item.gallery_images))
        .bind(item.service_id)
        .bind(Json(item.technologies_used))
        .bind(item.project_date)
        .bind(item.is_featured)
        .bind(item.is_published)
        .bind(item.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        PortfolioItem::try_from(row)
    }

    async fn update(&self, id: i64, changes: PortfolioChanges) -> DomainResult<PortfolioItem> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE portfolio SET updated_at = ");
        builder.push_bind(changes.updated_at);
        sql::set(&mut builder, "title", changes.title);
        sql::set(&mut builder, "slug", changes.slug.map(String::from));
        sql::set(&mut builder, "description", changes.description);
        sql::set(&mut builder, "client_name", changes.client_name);
        sql::set(&mut builder, "project_url", changes.project_url);
        sql::set(&mut builder, "featured_image", changes.featured_image);
        sql::set(&mut builder, "gallery_images", changes.gallery_images.map(Json));
        sql::set(&mut builder, "service_id", changes.service_id);
        sql::set(
            &mut builder,
            "technologies_used",
            changes.technologies_used.map(Json),
        );
        sql::set(&mut builder, "project_date", changes.project_date);
        sql::set(&mut builder, "is_featured", changes.is_featured);
        sql::set(&mut builder, "is_published", changes.is_published);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<PortfolioRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("portfolio item"))?;
        PortfolioItem::try_from(row)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "portfolio", id, "portfolio item").await
    }

    async fn toggle(
        &self,
        id: i64,
        flag: PortfolioFlag,
        at: DateTime<Utc>,
    ) -> DomainResult<PortfolioItem> {
        let column = flag.column();
        let row = sqlx::query_as::<_, PortfolioRow>(&format!(
            "UPDATE portfolio SET {column} = NOT {column}, updated_at = $1
             WHERE id = $2 RETURNING {COLUMNS}"
        ))
        .bind(at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("portfolio item"))?;
        PortfolioItem::try_from(row)
    }
}
