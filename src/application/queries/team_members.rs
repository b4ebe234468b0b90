// src/application/queries/team_members.rs
use std::sync::Arc;

use super::{flag, search_term};
use crate::{
    application::{
        dto::TeamMemberDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::team_member::{TeamMemberFilter, TeamMemberRepository},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTeamMembersQuery {
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub active: Option<bool>,
    #[serde(default, deserialize_with = "flag::optional")]
    #[param(value_type = Option<bool>)]
    pub verified: Option<bool>,
    pub role: Option<String>,
    pub search: Option<String>,
}

pub struct TeamMemberQueryService {
    repo: Arc<dyn TeamMemberRepository>,
}

impl TeamMemberQueryService {
    pub fn new(repo: Arc<dyn TeamMemberRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        query: ListTeamMembersQuery,
    ) -> ApplicationResult<Vec<TeamMemberDto>> {
        let filter = TeamMemberFilter {
            active: query.active,
            verified: query.verified,
            role: search_term(query.role),
            search: search_term(query.search),
        };
        let members = self.repo.list(&filter).await?;
        Ok(members.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<TeamMemberDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Team member not found"))
    }

    pub async fn by_role(&self, role: &str) -> ApplicationResult<Vec<TeamMemberDto>> {
        self.list(ListTeamMembersQuery {
            active: Some(true),
            role: Some(role.to_string()),
            ..Default::default()
        })
        .await
    }
}
