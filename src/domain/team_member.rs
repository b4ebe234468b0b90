// src/domain/team_member.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub is_verified: bool,
    pub skills: Vec<String>,
    pub links: SocialLinks,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub joined_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub twitter_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub is_verified: bool,
    pub skills: Vec<String>,
    pub links: SocialLinks,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub joined_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct TeamMemberChanges {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<Option<String>>,
    pub photo_url: Option<Option<String>>,
    pub is_verified: Option<bool>,
    pub skills: Option<Vec<String>>,
    pub linkedin_url: Option<Option<String>>,
    pub github_url: Option<Option<String>>,
    pub twitter_url: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub joined_date: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamMemberFlag {
    Active,
    Verified,
}

impl TeamMemberFlag {
    pub fn column(self) -> &'static str {
        match self {
            Self::Active => "is_active",
            Self::Verified => "is_verified",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamMemberFilter {
    pub active: Option<bool>,
    pub verified: Option<bool>,
    /// Case-insensitive exact match.
    pub role: Option<String>,
    pub search: Option<String>,
}

#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    async fn list(&self, filter: &TeamMemberFilter) -> DomainResult<Vec<TeamMember>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TeamMember>>;
    async fn insert(&self, member: NewTeamMember) -> DomainResult<TeamMember>;
    async fn update(&self, id: i64, changes: TeamMemberChanges) -> DomainResult<TeamMember>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn toggle(&self, id: i64, flag: TeamMemberFlag) -> DomainResult<TeamMember>;
}
