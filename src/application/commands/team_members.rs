// src/application/commands/team_members.rs
use std::sync::Arc;

use super::{check_string_items, patch};
use crate::{
    application::{
        dto::TeamMemberDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::media::{MediaLibrary, MediaNamespace, UploadedFile},
        validation::FieldErrors,
    },
    domain::team_member::{
        NewTeamMember, SocialLinks, TeamMember, TeamMemberChanges, TeamMemberFlag,
        TeamMemberRepository,
    },
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

const MAX_SKILL_LEN: usize = 50;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateTeamMemberCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "The name field is required and may not be greater than 100 characters."
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "The role field is required and may not be greater than 100 characters."
    ))]
    pub role: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub is_verified: Option<bool>,
    pub skills: Option<Vec<String>>,
    #[validate(
        url(message = "The linkedin url must be a valid URL."),
        length(max = 255, message = "The linkedin url may not be greater than 255 characters.")
    )]
    pub linkedin_url: Option<String>,
    #[validate(
        url(message = "The github url must be a valid URL."),
        length(max = 255, message = "The github url may not be greater than 255 characters.")
    )]
    pub github_url: Option<String>,
    #[validate(
        url(message = "The twitter url must be a valid URL."),
        length(max = 255, message = "The twitter url may not be greater than 255 characters.")
    )]
    pub twitter_url: Option<String>,
    #[validate(
        email(message = "The email must be a valid email address."),
        length(max = 100, message = "The email may not be greater than 100 characters.")
    )]
    pub email: Option<String>,
    #[validate(length(max = 20, message = "The phone may not be greater than 20 characters."))]
    pub phone: Option<String>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub joined_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamMemberCommand {
    #[validate(length(
        min = 1,
        max = 100,
        message = "The name must be between 1 and 100 characters."
    ))]
    pub name: Option<String>,
    #[validate(length(
        min = 1,
        max = 100,
        message = "The role must be between 1 and 100 characters."
    ))]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub photo_url: Option<Option<String>>,
    pub is_verified: Option<bool>,
    pub skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(
        url(message = "The linkedin url must be a valid URL."),
        length(max = 255, message = "The linkedin url may not be greater than 255 characters.")
    )]
    pub linkedin_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(
        url(message = "The github url must be a valid URL."),
        length(max = 255, message = "The github url may not be greater than 255 characters.")
    )]
    pub github_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(
        url(message = "The twitter url must be a valid URL."),
        length(max = 255, message = "The twitter url may not be greater than 255 characters.")
    )]
    pub twitter_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(
        email(message = "The email must be a valid email address."),
        length(max = 100, message = "The email may not be greater than 100 characters.")
    )]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 20, message = "The phone may not be greater than 20 characters."))]
    pub phone: Option<Option<String>>,
    #[validate(range(min = 0, message = "The sort order must be at least 0."))]
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<NaiveDate>)]
    pub joined_date: Option<Option<NaiveDate>>,
}

pub struct TeamMemberCommandService {
    repo: Arc<dyn TeamMemberRepository>,
    media: Arc<MediaLibrary>,
    clock: Arc<dyn Clock>,
}

impl TeamMemberCommandService {
    pub fn new(
        repo: Arc<dyn TeamMemberRepository>,
        media: Arc<MediaLibrary>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, media, clock }
    }

    pub async fn create(
        &self,
        command: CreateTeamMemberCommand,
    ) -> ApplicationResult<TeamMemberDto> {
        let mut errors = FieldErrors::collect(&command);
        check_string_items(&mut errors, "skills", command.skills.as_deref(), MAX_SKILL_LEN);
        errors.into_result()?;

        let member = self
            .repo
            .insert(NewTeamMember {
                name: command.name,
                role: command.role,
                bio: command.bio,
                photo_url: command.photo_url,
                is_verified: command.is_verified.unwrap_or(false),
                skills: command.skills.unwrap_or_default(),
                links: SocialLinks {
                    linkedin_url: command.linkedin_url,
                    github_url: command.github_url,
                    twitter_url: command.twitter_url,
                },
                email: command.email,
                phone: command.phone,
                sort_order: command.sort_order.unwrap_or(0),
                is_active: command.is_active.unwrap_or(true),
                joined_date: command.joined_date,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(member.into())
    }

    pub async fn update(
        &self,
        id: i64,
        command: UpdateTeamMemberCommand,
    ) -> ApplicationResult<TeamMemberDto> {
        let current = self.load(id).await?;
        let mut errors = FieldErrors::collect(&command);
        check_string_items(&mut errors, "skills", command.skills.as_deref(), MAX_SKILL_LEN);
        errors.into_result()?;

        let changes = TeamMemberChanges {
            name: command.name,
            role: command.role,
            bio: command.bio,
            photo_url: command.photo_url,
            is_verified: command.is_verified,
            skills: command.skills,
            linkedin_url: command.linkedin_url,
            github_url: command.github_url,
            twitter_url: command.twitter_url,
            email: command.email,
            phone: command.phone,
            sort_order: command.sort_order,
            is_active: command.is_active,
            joined_date: command.joined_date,
        };
        let updated = self.repo.update(id, changes).await?;
        self.media
            .discard_replaced(current.photo_url.as_deref(), updated.photo_url.as_deref())
            .await;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        let current = self.load(id).await?;
        self.repo.delete(id).await?;
        self.media.discard(current.photo_url.as_deref()).await;
        info!(member_id = id, "team member deleted");
        Ok(())
    }

    pub async fn toggle(&self, id: i64, flag: TeamMemberFlag) -> ApplicationResult<TeamMemberDto> {
        self.load(id).await?;
        Ok(self.repo.toggle(id, flag).await?.into())
    }

    pub async fn upload_photo(
        &self,
        id: i64,
        file: UploadedFile,
    ) -> ApplicationResult<TeamMemberDto> {
        let current = self.load(id).await?;
        let path = self.media.store(MediaNamespace::Team, file).await?;
        let changes = TeamMemberChanges {
            photo_url: Some(Some(path)),
            ..TeamMemberChanges::default()
        };
        let updated = self.repo.update(id, changes).await?;
        self.media
            .discard_replaced(current.photo_url.as_deref(), updated.photo_url.as_deref())
            .await;
        Ok(updated.into())
    }

    async fn load(&self, id: i64) -> ApplicationResult<TeamMember> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Team member not found"))
    }
}
