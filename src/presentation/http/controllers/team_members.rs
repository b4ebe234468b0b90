// src/presentation/http/controllers/team_members.rs
use crate::application::{
    commands::team_members::{CreateTeamMemberCommand, UpdateTeamMemberCommand},
    dto::TeamMemberDto,
    queries::team_members::ListTeamMembersQuery,
};
use crate::domain::team_member::TeamMemberFlag;
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, IdPath, JsonBody, QueryParams, Uploads},
    response::Envelope,
    state::HttpState,
};
use axum::{Extension, extract::Path};

#[utoipa::path(
    get,
    path = "/api/team-members",
    params(ListTeamMembersQuery),
    responses(
        (status = 200, description = "Members ordered by sort order.", body = [TeamMemberDto])
    ),
    security([]),
    tag = "Team members"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    QueryParams(query): QueryParams<ListTeamMembersQuery>,
) -> HttpResult<Envelope<Vec<TeamMemberDto>>> {
    state
        .services
        .team_member_queries
        .list(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/team-members/{id}",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "The member.", body = TeamMemberDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "Team members"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<TeamMemberDto>> {
    state
        .services
        .team_member_queries
        .get(id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/team-members/by-role/{role}",
    params(("role" = String, Path, description = "Role, matched case-insensitively")),
    responses(
        (status = 200, description = "Active members with the role.", body = [TeamMemberDto])
    ),
    security([]),
    tag = "Team members"
)]
pub async fn by_role(
    Extension(state): Extension<HttpState>,
    Path(role): Path<String>,
) -> HttpResult<Envelope<Vec<TeamMemberDto>>> {
    state
        .services
        .team_member_queries
        .by_role(&role)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/team-members",
    request_body = CreateTeamMemberCommand,
    responses(
        (status = 201, description = "Member created.", body = TeamMemberDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Team members"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreateTeamMemberCommand>,
) -> HttpResult<Envelope<TeamMemberDto>> {
    let member = state
        .services
        .team_member_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(member, "Team member created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/team-members/{id}",
    params(("id" = i64, Path, description = "Member id")),
    request_body = UpdateTeamMemberCommand,
    responses(
        (status = 200, description = "Member updated.", body = TeamMemberDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Team members"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdateTeamMemberCommand>,
) -> HttpResult<Envelope<TeamMemberDto>> {
    let member = state
        .services
        .team_member_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(member, "Team member updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/team-members/{id}",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Team members"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .team_member_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("Team member deleted successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/team-members/{id}/toggle-active",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "`is_active` flipped.", body = TeamMemberDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Team members"
)]
pub async fn toggle_active(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<TeamMemberDto>> {
    let member = state
        .services
        .team_member_commands
        .toggle(id, TeamMemberFlag::Active)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        member,
        "Team member status updated successfully",
    ))
}

#[utoipa::path(
    patch,
    path = "/api/team-members/{id}/toggle-verified",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "`is_verified` flipped.", body = TeamMemberDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Team members"
)]
pub async fn toggle_verified(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<TeamMemberDto>> {
    let member = state
        .services
        .team_member_commands
        .toggle(id, TeamMemberFlag::Verified)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        member,
        "Team member verification status updated successfully",
    ))
}

#[utoipa::path(
    post,
    path = "/api/team-members/{id}/photo",
    params(("id" = i64, Path, description = "Member id")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field, at most 3 MB."),
    responses(
        (status = 200, description = "Photo replaced.", body = TeamMemberDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Missing, oversized or non-image file.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Team members"
)]
pub async fn upload_photo(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    uploads: Uploads,
) -> HttpResult<Envelope<TeamMemberDto>> {
    let file = uploads.single("file").await?;
    let member = state
        .services
        .team_member_commands
        .upload_photo(id, file)
        .await
        .into_http()?;
    Ok(Envelope::with_message(member, "Photo uploaded successfully"))
}
