// src/infrastructure/repositories/postgres_team_member.rs
use super::{map_sqlx, sql};
use crate::domain::{
    errors::{DomainError, DomainResult},
    team_member::{
        NewTeamMember, SocialLinks, TeamMember, TeamMemberChanges, TeamMemberFilter,
        TeamMemberFlag, TeamMemberRepository,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};

const COLUMNS: &str = "id, name, role, bio, photo_url, is_verified, skills, linkedin_url,
    github_url, twitter_url, email, phone, sort_order, is_active, joined_date, created_at";

#[derive(Clone)]
pub struct PostgresTeamMemberRepository {
    pool: PgPool,
}

impl PostgresTeamMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TeamMemberRow {
    id: i64,
    name: String,
    role: String,
    bio: Option<String>,
    photo_url: Option<String>,
    is_verified: bool,
    skills: Json<Vec<String>>,
    linkedin_url: Option<String>,
    github_url: Option<String>,
    twitter_url: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    sort_order: i32,
    is_active: bool,
    joined_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl From<TeamMemberRow> for TeamMember {
    fn from(row: TeamMemberRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            role: row.role,
            bio: row.bio,
            photo_url: row.photo_url,
            is_verified: row.is_verified,
            skills: row.skills.0,
            links: SocialLinks {
                linkedin_url: row.linkedin_url,
                github_url: row.github_url,
                twitter_url: row.twitter_url,
            },
            email: row.email,
            phone: row.phone,
            sort_order: row.sort_order,
            is_active: row.is_active,
            joined_date: row.joined_date,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl TeamMemberRepository for PostgresTeamMemberRepository {
    async fn list(&self, filter: &TeamMemberFilter) -> DomainResult<Vec<TeamMember>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM team_members"));
        let mut predicates = sql::Predicates::default();
        predicates.eq(&mut builder, "is_active", filter.active);
        predicates.eq(&mut builder, "is_verified", filter.verified);
        if let Some(role) = filter.role.clone() {
            predicates.next(&mut builder);
            builder.push("LOWER(role) = LOWER(").push_bind(role).push(")");
        }
        predicates.search(&mut builder, &["name", "role", "bio"], filter.search.as_deref());
        builder.push(" ORDER BY sort_order, name");

        let rows = builder
            .build_query_as::<TeamMemberRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TeamMember>> {
        let row = sqlx::query_as::<_, TeamMemberRow>(&format!(
            "SELECT {COLUMNS} FROM team_members WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, member: NewTeamMember) -> DomainResult<TeamMember> {
        let row = sqlx::query_as::<_, TeamMemberRow>(&format!(
            "INSERT INTO team_members
                (name, role, bio, photo_url, is_verified, skills, linkedin_url, github_url,
                 twitter_url, email, phone, sort_order, is_active, joined_date, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        ))
        .bind(member.name)
        .bind(member.role)
        .bind(member.bio)
        .bind(member.photo_url)
        .bind(member.is_verified)
        .bind(Json(member.skills))
        .bind(member.links.linkedin_url)
        .bind(member.links.github_url)
        .bind(member.links.twitter_url)
        .bind(member.email)
        .bind(member.phone)
        .bind(member.sort_order)
        .bind(member.is_active)
        .bind(member.joined_date)
        .bind(member.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, changes: TeamMemberChanges) -> DomainResult<TeamMember> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE team_members SET id = id");
        sql::set(&mut builder, "name", changes.name);
        sql::set(&mut builder, "role", changes.role);
        sql::set(&mut builder, "bio", changes.bio);
        sql::set(&mut builder, "photo_url", changes.photo_url);
        sql::set(&mut builder, "is_verified", changes.is_verified);
        sql::set(&mut builder, "skills", changes.skills.map(Json));
        sql::set(&mut builder, "linkedin_url", changes.linkedin_url);
        sql::set(&mut builder, "github_url", changes.github_url);
        sql::set(&mut builder, "twitter_url", changes.twitter_url);
        sql::set(&mut builder, "email", changes.email);
        sql::set(&mut builder, "phone", changes.phone);
        sql::set(&mut builder, "sort_order", changes.sort_order);
        sql::set(&mut builder, "is_active", changes.is_active);
        sql::set(&mut builder, "joined_date", changes.joined_date);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<TeamMemberRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("team member"))?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sql::delete_by_id(&self.pool, "team_members", id, "team member").await
    }

    async fn toggle(&self, id: i64, flag: TeamMemberFlag) -> DomainResult<TeamMember> {
        let column = flag.column();
        let row = sqlx::query_as::<_, TeamMemberRow>(&format!(
            "UPDATE team_members SET {column} = NOT {column} WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("team member"))?;
        Ok(row.into())
    }
}
