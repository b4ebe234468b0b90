// src/infrastructure/repositories/postgres_service_card.rs
use super::{map_sqlx, sql};
use crate::domain::{
    errors::{DomainError, DomainResult},
    service_card::{NewServiceCard, ServiceCard, ServiceCardChanges, ServiceCardRepository},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, name, description, picture, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresServiceCardRepository {
    pool: PgPool,
}

impl PostgresServiceCardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ServiceCardRow {
    id: i64,
    name: String,
    description: Option<String>,
    picture: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ServiceCardRow> for ServiceCard {
    fn from(row: ServiceCardRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            picture: row.picture,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ServiceCardRepository for PostgresServiceCardRepository {
    async fn list(&self) -> DomainResult<Vec<ServiceCard>> {
        let rows = sqlx::query_as::<_, ServiceCardRow>(&format!(
            "SELECT {COLUMNS} FROM service_cards ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ServiceCard>> {
        let row = sqlx::query_as::<_, ServiceCardRow>(&format!(
            "SELECT {COLUMNS} FROM service_cards WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, card: NewServiceCard) -> DomainResult<ServiceCard> {
        let row = sqlx::query_as::<_, ServiceCardRow>(&format!(
            "INSERT INTO service_cards (name, description, picture, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4) RETURNING {COLUMNS}"
        ))
        .bind(card.name)
        .bind(card.description)
        .bind(card.picture)
        .bind(card.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, changes: ServiceCardChanges) -> DomainResult<ServiceCard> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE service_cards SET updated_at = ");
        builder.push_bind(changes.updated_at);
        sql::set(&mut builder, "name", changes.name);
        sql::set(&mut builder, "description", changes.description);
        sql::set(&mut builder, "picture", changes.picture);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<ServiceCardRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("service card"))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "service_cards", id, "service card").await
    }
}
