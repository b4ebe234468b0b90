// src/infrastructure/repositories/postgres_plan_feature.rs
use super::{map_sqlx, sql};
use crate::domain::{
    errors::{DomainError, DomainResult},
    plan_feature::{
        NewPlanFeature, PlanFeature, PlanFeatureChanges, PlanFeatureFilter, PlanFeatureRepository,
    },
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, plan_id, feature_name, is_included, feature_value, tooltip, sort_order";
const INSERT: &str = "INSERT INTO plan_features
        (plan_id, feature_name, is_included, feature_value, tooltip, sort_order)
     VALUES ($1, $2, $3, $4, $5, $6)";

#[derive(Clone)]
pub struct PostgresPlanFeatureRepository {
    pool: PgPool,
}

impl PostgresPlanFeatureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PlanFeatureRow {
    id: i64,
    plan_id: i64,
    feature_name: String,
    is_included: bool,
    feature_value: Option<String>,
    tooltip: Option<String>,
    sort_order: i32,
}

impl From<PlanFeatureRow> for PlanFeature {
    fn from(row: PlanFeatureRow) -> Self {
        Self {
            id: row.id,
            plan_id: row.plan_id,
            feature_name: row.feature_name,
            is_included: row.is_included,
            feature_value: row.feature_value,
            tooltip: row.tooltip,
            sort_order: row.sort_order,
        }
    }
}

#[async_trait]
impl PlanFeatureRepository for PostgresPlanFeatureRepository {
    async fn list(&self, filter: &PlanFeatureFilter) -> DomainResult<Vec<PlanFeature>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM plan_features"));
        let mut predicates = sql::Predicates::default();
        predicates.eq(&mut builder, "plan_id", filter.plan_id);
        predicates.eq(&mut builder, "is_included", filter.included);
        builder.push(" ORDER BY sort_order, id");

        let rows = builder
            .build_query_as::<PlanFeatureRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<PlanFeature>> {
        let row = sqlx::query_as::<_, PlanFeatureRow>(&format!(
            "SELECT {COLUMNS} FROM plan_features WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, feature: NewPlanFeature) -> DomainResult<PlanFeature> {
        let row = sqlx::query_as::<_, PlanFeatureRow>(&format!("{INSERT} RETURNING {COLUMNS}"))
            .bind(feature.plan_id)
            .bind(feature.feature_name)
            .bind(feature.is_included)
            .bind(feature.feature_value)
            .bind(feature.tooltip)
            .bind(feature.sort_order)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(row.into())
    }

    async fn insert_many(&self, features: Vec<NewPlanFeature>) -> DomainResult<Vec<PlanFeature>> {
        let statement = format!("{INSERT} RETURNING {COLUMNS}");
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let mut created = Vec::with_capacity(features.len());
        for feature in features {
            let row = sqlx::query_as::<_, PlanFeatureRow>(&statement)
                .bind(feature.plan_id)
                .bind(feature.feature_name)
                .bind(feature.is_included)
                .bind(feature.feature_value)
                .bind(feature.tooltip)
                .bind(feature.sort_order)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            created.push(row.into());
        }
        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, id: i64, changes: PlanFeatureChanges) -> DomainResult<PlanFeature> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE plan_features SET id = id");
        sql::set(&mut builder, "plan_id", changes.plan_id);
        sql::set(&mut builder, "feature_name", changes.feature_name);
        sql::set(&mut builder, "is_included", changes.is_included);
        sql::set(&mut builder, "feature_value", changes.feature_value);
        sql::set(&mut builder, "tooltip", changes.tooltip);
        sql::set(&mut builder, "sort_order", changes.sort_order);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<PlanFeatureRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("plan feature"))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "plan_features", id, "plan feature").await
    }

    async fn toggle_included(&self, id: i64) -> DomainResult<PlanFeature> {
        let row = sqlx::query_as::<_, PlanFeatureRow>(&format!(
            "UPDATE plan_features SET is_included = NOT is_included WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("plan feature"))?;
        Ok(row.into())
    }
}
