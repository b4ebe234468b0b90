// src/infrastructure/repositories/postgres_testimonial.rs
use super::{map_sqlx, map_sqlx_delete, sql};
use crate::domain::{
    common::{Page, PageRequest, SortPosition},
    errors::{DomainError, DomainResult},
    testimonial::{
        NewTestimonial, Rating, ServiceRatingSummary, Testimonial, TestimonialBulkAction,
        TestimonialChanges, TestimonialFilter, TestimonialFlag, TestimonialRepository,
        TestimonialStats,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, client_name, company, position, testimonial, rating, photo_url,
    service_id, is_featured, is_approved, sort_order, created_at";

#[derive(Clone)]
pub struct PostgresTestimonialRepository {
    pool: PgPool,
}

impl PostgresTestimonialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_rows(
        &self,
        filter: &TestimonialFilter,
        page: Option<PageRequest>,
    ) -> DomainResult<Vec<Testimonial>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM testimonials"));
        push_filters(&mut builder, filter);
        builder.push(" ORDER BY sort_order, created_at DESC, id DESC");
        if let Some(page) = page {
            builder.push(" LIMIT ").push_bind(page.limit());
            builder.push(" OFFSET ").push_bind(page.offset());
        }
        let rows = builder
            .build_query_as::<TestimonialRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Testimonial::try_from).collect()
    }
}

#[derive(Debug, FromRow)]
struct TestimonialRow {
    id: i64,
    client_name: String,
    company: Option<String>,
    position: Option<String>,
    testimonial: String,
    rating: i16,
    photo_url: Option<String>,
    service_id: Option<i64>,
    is_featured: bool,
    is_approved: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<TestimonialRow> for Testimonial {
    type Error = DomainError;

    fn try_from(row: TestimonialRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            client_name: row.client_name,
            company: row.company,
            position: row.position,
            testimonial: row.testimonial,
            rating: Rating::new(row.rating)?,
            photo_url: row.photo_url,
            service_id: row.service_id,
            is_featured: row.is_featured,
            is_approved: row.is_approved,
            sort_order: row.sort_order,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TotalsRow {
    total: i64,
    approved: i64,
    pending: i64,
    featured: i64,
    average_rating: Option<f64>,
}

#[derive(Debug, FromRow)]
struct RatingCountRow {
    rating: i16,
    count: i64,
}

#[derive(Debug, FromRow)]
struct ServiceSummaryRow {
    service_id: i64,
    service_name: Option<String>,
    count: i64,
    avg_rating: f64,
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &TestimonialFilter) {
    let mut predicates = sql::Predicates::default();
    predicates.eq(builder, "is_approved", filter.approved);
    predicates.eq(builder, "is_featured", filter.featured);
    predicates.eq(builder, "service_id", filter.service_id);
    predicates.eq(builder, "rating", filter.rating.map(Rating::value));
    if let Some(min) = filter.min_rating {
        predicates.next(builder);
        builder.push("rating >= ").push_bind(min.value());
    }
    predicates.search(
        builder,
        &["client_name", "company", "testimonial"],
        filter.search.as_deref(),
    );
}

#[async_trait]
impl TestimonialRepository for PostgresTestimonialRepository {
    async fn list(&self, filter: &TestimonialFilter) -> DomainResult<Vec<Testimonial>> {
        self.fetch_rows(filter, None).await
    }

    async fn list_page(
        &self,
        filter: &TestimonialFilter,
        page: PageRequest,
    ) -> DomainResult<Page<Testimonial>> {
        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM testimonials");
        push_filters(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        let items = self.fetch_rows(filter, Some(page)).await?;
        Ok(Page::new(items, sql::to_count(total), page))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Testimonial>> {
        let row = sqlx::query_as::<_, TestimonialRow>(&format!(
            "SELECT {COLUMNS} FROM testimonials WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(Testimonial::try_from).transpose()
    }

    async fn insert(&self, testimonial: NewTestimonial) -> DomainResult<Testimonial> {
        let row = sqlx::query_as::<_, TestimonialRow>(&format!(
            "INSERT INTO testimonials
                (client_name, company, position, testimonial, rating, photo_url, service_id,
                 is_featured, is_approved, sort_order, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING {COLUMNS}"
        ))
        .bind(testimonial.client_name)
        .bind(testimonial.company)
        .bind(testimonial.position)
        .bind(testimonial.testimonial)
        .bind(testimonial.rating.value())
        .bind(testimonial.photo_url)
        .bind(testimonial.service_id)
        .bind(testimonial.is_featured)
        .bind(testimonial.is_approved)
        .bind(testimonial.sort_order)
        .bind(testimonial.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Testimonial::try_from(row)
    }

    async fn update(&self, id: i64, changes: TestimonialChanges) -> DomainResult<Testimonial> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE testimonials SET id = id");
        sql::set(&mut builder, "client_name", changes.client_name);
        sql::set(&mut builder, "company", changes.company);
        sql::set(&mut builder, "position", changes.position);
        sql::set(&mut builder, "testimonial", changes.testimonial);
        sql::set(&mut builder, "rating", changes.rating.map(Rating::value));
        sql::set(&mut builder, "photo_url", changes.photo_url);
        sql::set(&mut builder, "service_id", changes.service_id);
        sql::set(&mut builder, "is_featured", changes.is_featured);
        sql::set(&mut builder, "is_approved", changes.is_approved);
        sql::set(&mut builder, "sort_order", changes.sort_order);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<TestimonialRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("testimonial"))?;
        Testimonial::try_from(row)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "testimonials", id, "testimonial").await
    }

    async fn toggle(&self, id: i64, flag: TestimonialFlag) -> DomainResult<Testimonial> {
        let column = flag.column();
        let row = sqlx::query_as::<_, TestimonialRow>(&format!(
            "UPDATE testimonials SET {column} = NOT {column} WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("testimonial"))?;
        Testimonial::try_from(row)
    }

    async fn reorder(&self, positions: &[SortPosition]) -> DomainResult<()> {
        sql::reorder(&self.pool, "testimonials", positions, None).await
    }

    async fn bulk_apply(
        &self,
        ids: &[i64],
        action: TestimonialBulkAction,
        service_id: Option<i64>,
    ) -> DomainResult<u64> {
        let assignment = match action {
            TestimonialBulkAction::Approve => "is_approved = TRUE",
            TestimonialBulkAction::Unapprove => "is_approved = FALSE",
            TestimonialBulkAction::Feature => "is_featured = TRUE",
            TestimonialBulkAction::Unfeature => "is_featured = FALSE",
            TestimonialBulkAction::Delete => {
                let result = sqlx::query("DELETE FROM testimonials WHERE id = ANY($1)")
                    .bind(ids)
                    .execute(&self.pool)
                    .await
                    .map_err(map_sqlx_delete)?;
                return Ok(result.rows_affected());
            }
        };

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE testimonials SET ");
        builder.push(assignment);
        sql::set(&mut builder, "service_id", service_id);
        builder.push(" WHERE id = ANY(").push_bind(ids.to_vec()).push(")");
        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn stats(&self) -> DomainResult<TestimonialStats> {
        let totals = sqlx::query_as::<_, TotalsRow>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE is_approved) AS approved,
                    COUNT(*) FILTER (WHERE NOT is_approved) AS pending,
                    COUNT(*) FILTER (WHERE is_featured) AS featured,
                    (AVG(rating) FILTER (WHERE is_approved))::float8 AS average_rating
             FROM testimonials",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let ratings = sqlx::query_as::<_, RatingCountRow>(
            "SELECT rating, COUNT(*) AS count FROM testimonials
             WHERE is_approved GROUP BY rating",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        let mut rating_distribution = [0_u64; 5];
        for row in ratings {
            let slot = usize::try_from(row.rating - Rating::MIN).ok();
            if let Some(count) = slot.and_then(|index| rating_distribution.get_mut(index)) {
                *count = sql::to_count(row.count);
            }
        }

        let top_services = sqlx::query_as::<_, ServiceSummaryRow>(
            "SELECT t.service_id AS service_id, s.name AS service_name,
                    COUNT(*) AS count, AVG(t.rating)::float8 AS avg_rating
             FROM testimonials t
             LEFT JOIN services s ON s.id = t.service_id
             WHERE t.is_approved AND t.service_id IS NOT NULL
             GROUP BY t.service_id, s.name
             ORDER BY count DESC, t.service_id
             LIMIT 5",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(|row| ServiceRatingSummary {
            service_id: row.service_id,
            service_name: row.service_name,
            count: sql::to_count(row.count),
            avg_rating: row.avg_rating,
        })
        .collect();

        Ok(TestimonialStats {
            total: sql::to_count(totals.total),
            approved: sql::to_count(totals.approved),
            pending: sql::to_count(totals.pending),
            featured: sql::to_count(totals.featured),
            average_rating: totals.average_rating,
            rating_distribution,
            top_services,
        })
    }
}
