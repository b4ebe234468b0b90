// src/infrastructure/repositories/postgres_site_setting.rs
use super::{map_sqlx, sql};
use crate::domain::{
    errors::{DomainError, DomainResult},
    site_setting::{
        NewSiteSetting, SettingKey, SiteSetting, SiteSettingChanges, SiteSettingRepository,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, setting_key, setting_value, setting_type, description, updated_at";

#[derive(Clone)]
pub struct PostgresSiteSettingRepository {
    pool: PgPool,
}

impl PostgresSiteSettingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SiteSettingRow {
    id: i64,
    setting_key: String,
    setting_value: String,
    setting_type: String,
    description: Option<String>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SiteSettingRow> for SiteSetting {
    type Error = DomainError;

    fn try_from(row: SiteSettingRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            key: SettingKey::new(row.setting_key)?,
            value: row.setting_value,
            setting_type: row.setting_type.parse()?,
            description: row.description,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SiteSettingRepository for PostgresSiteSettingRepository {
    async fn list(&self) -> DomainResult<Vec<SiteSetting>> {
        let rows = sqlx::query_as::<_, SiteSettingRow>(&format!(
            "SELECT {COLUMNS} FROM site_settings ORDER BY setting_key"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(SiteSetting::try_from).collect()
    }

    async fn find_by_key(&self, key: &SettingKey) -> DomainResult<Option<SiteSetting>> {
        let row = sqlx::query_as::<_, SiteSettingRow>(&format!(
            "SELECT {COLUMNS} FROM site_settings WHERE setting_key = $1"
        ))
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(SiteSetting::try_from).transpose()
    }

    async fn insert(&self, setting: NewSiteSetting) -> DomainResult<SiteSetting> {
        let row = sqlx::query_as::<_, SiteSettingRow>(&format!(
            "INSERT INTO site_settings (setting_key, setting_value, setting_type, description, updated_at)
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(setting.key.as_str())
        .bind(setting.value)
        .bind(setting.setting_type.as_str())
        .bind(setting.description)
        .bind(setting.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        SiteSetting::try_from(row)
    }

    async fn update(
        &self,
        key: &SettingKey,
        changes: SiteSettingChanges,
    ) -> DomainResult<SiteSetting> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE site_settings SET updated_at = ");
        builder.push_bind(changes.updated_at);
        sql::set(&mut builder, "setting_value", changes.value);
        sql::set(
            &mut builder,
            "setting_type",
            changes.setting_type.map(|kind| kind.as_str()),
        );
        sql::set(&mut builder, "description", changes.description);
        builder
            .push(" WHERE setting_key = ")
            .push_bind(key.as_str().to_string());
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<SiteSettingRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("setting"))?;
        SiteSetting::try_from(row)
    }

    async fn delete(&self, key: &SettingKey) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM site_settings WHERE setting_key = $1")
            .bind(key.as_str())
            .execute(&self.pool)
            .await
            .map_err(super::map_sqlx_delete)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("setting"));
        }
        Ok(())
    }
}
