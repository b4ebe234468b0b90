// src/application/dto/team_members.rs
use crate::domain::team_member::TeamMember;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberDto {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub is_verified: bool,
    pub skills: Vec<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub twitter_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub joined_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<TeamMember> for TeamMemberDto {
    fn from(member: TeamMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            role: member.role,
            bio: member.bio,
            photo_url: member.photo_url,
            is_verified: member.is_verified,
            skills: member.skills,
            linkedin_url: member.links.linkedin_url,
            github_url: member.links.github_url,
            twitter_url: member.links.twitter_url,
            email: member.email,
            phone: member.phone,
            sort_order: member.sort_order,
            is_active: member.is_active,
            joined_date: member.joined_date,
            created_at: member.created_at,
        }
    }
}
