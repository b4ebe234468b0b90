// src/infrastructure/repositories/postgres_hosting_type.rs
use super::{map_sqlx, sql};
use crate::domain::{
    errors::{DomainError, DomainResult},
    hosting_type::{NewHostingType, HostingType, HostingTypeChanges, HostingTypeRepository},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, name, image, description, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresHostingTypeRepository {
    pool: PgPool,
}

impl PostgresHostingTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HostingTypeRow {
    id: i64,
    name: String,
    image: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<HostingTypeRow> for HostingType {
    fn from(row: HostingTypeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image: row.image,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl HostingTypeRepository for PostgresHostingTypeRepository {
    async fn list(&self) -> DomainResult<Vec<HostingType>> {
        let rows = sqlx::query_as::<_, HostingTypeRow>(&format!(
            "SELECT {COLUMNS} FROM hosting_types ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<HostingType>> {
        let row = sqlx::query_as::<_, HostingTypeRow>(&format!(
            "SELECT {COLUMNS} FROM hosting_types WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, hosting_type: NewHostingType) -> DomainResult<HostingType> {
        let row = sqlx::query_as::<_, HostingTypeRow>(&format!(
            "INSERT INTO hosting_types (name, image, description, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4) RETURNING {COLUMNS}"
        ))
        .bind(hosting_type.name)
        .bind(hosting_type.image)
        .bind(hosting_type.description)
        .bind(hosting_type.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, changes: HostingTypeChanges) -> DomainResult<HostingType> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE hosting_types SET updated_at = ");
        builder.push_bind(changes.updated_at);
        sql::set(&mut builder, "name", changes.name);
        sql::set(&mut builder, "image", changes.image);
        sql::set(&mut builder, "description", changes.description);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<HostingTypeRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("hosting type"))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "hosting_types", id, "hosting type").await
    }
}
