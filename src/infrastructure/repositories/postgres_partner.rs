// src/infrastructure/repositories/postgres_partner.rs
use super::{map_sqlx, sql};
use crate::domain::{
    errors::{DomainError, DomainResult},
    partner::{NewPartner, Partner, PartnerChanges, PartnerFilter, PartnerRepository},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, name, picture, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPartnerRepository {
    pool: PgPool,
}

impl PostgresPartnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PartnerRow {
    id: i64,
    name: String,
    picture: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PartnerRow> for Partner {
    fn from(row: PartnerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            picture: row.picture,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PartnerRepository for PostgresPartnerRepository {
    async fn list(&self, filter: &PartnerFilter) -> DomainResult<Vec<Partner>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM partners"));
        let mut predicates = sql::Predicates::default();
        predicates.search(&mut builder, &["name"], filter.search.as_deref());
        builder.push(if filter.descending {
            " ORDER BY name DESC, id DESC"
        } else {
            " ORDER BY name, id"
        });
        if let Some(limit) = filter.limit {
            builder.push(" LIMIT ").push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<PartnerRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Partner>> {
        let row = sqlx::query_as::<_, PartnerRow>(&format!(
            "SELECT {COLUMNS} FROM partners WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, partner: NewPartner) -> DomainResult<Partner> {
        let row = sqlx::query_as::<_, PartnerRow>(&format!(
            "INSERT INTO partners (name, picture, created_at, updated_at)
             VALUES ($1, $2, $3, $3) RETURNING {COLUMNS}"
        ))
        .bind(partner.name)
        .bind(partner.picture)
        .bind(partner.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, changes: PartnerChanges) -> DomainResult<Partner> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE partners SET updated_at = ");
        builder.push_bind(changes.updated_at);
        sql::set(&mut builder, "name", changes.name);
        sql::set(&mut builder, "picture", changes.picture);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<PartnerRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("partner"))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "partners", id, "partner").await
    }
}
