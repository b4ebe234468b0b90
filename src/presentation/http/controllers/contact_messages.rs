// src/presentation/http/controllers/contact_messages.rs
use crate::application::{
    commands::contact_messages::{
        BulkUpdateContactMessagesCommand, SubmitContactMessageCommand,
        UpdateContactMessageCommand, UpdateContactStatusCommand,
    },
    dto::{AffectedDto, ContactExportDto, ContactMessageDto, ContactStatsDto, PageDto},
    queries::contact_messages::{
        ContactExport, ExportContactMessagesQuery, ListContactMessagesQuery,
    },
};
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, ClientMeta, IdPath, JsonBody, QueryParams},
    response::Envelope,
    state::HttpState,
};
use axum::{
    Extension,
    http::header,
    response::{IntoResponse, Response},
};

#[utoipa::path(
    post,
    path = "/api/contact-messages",
    request_body = SubmitContactMessageCommand,
    responses(
        (status = 201, description = "Message stored with the caller's address and user agent.", body = ContactMessageDto),
        (status = 422, description = "Validation failed.", body = ErrorResponse),
        (status = 429, description = "Too many submissions from this address.")
    ),
    security([]),
    tag = "Contact messages"
)]
pub async fn submit(
    Extension(state): Extension<HttpState>,
    ClientMeta(client): ClientMeta,
    JsonBody(command): JsonBody<SubmitContactMessageCommand>,
) -> HttpResult<Envelope<ContactMessageDto>> {
    let message = state
        .services
        .contact_message_commands
        .submit(command, client)
        .await
        .into_http()?;
    Ok(Envelope::created(
        message,
        "Contact message submitted successfully",
    ))
}

#[utoipa::path(
    get,
    path = "/api/contact-messages",
    params(ListContactMessagesQuery),
    responses(
        (status = 200, description = "One page of messages, newest first.", body = PageDto<ContactMessageDto>),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Invalid filter or paging values.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact messages"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    QueryParams(query): QueryParams<ListContactMessagesQuery>,
) -> HttpResult<Envelope<PageDto<ContactMessageDto>>> {
    state
        .services
        .contact_message_queries
        .list(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/contact-messages/stats",
    responses(
        (status = 200, description = "Counts by status and period plus top interests and budgets.", body = ContactStatsDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact messages"
)]
pub async fn stats(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
) -> HttpResult<Envelope<ContactStatsDto>> {
    state
        .services
        .contact_message_queries
        .stats()
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/contact-messages/export",
    params(ExportContactMessagesQuery),
    responses(
        (status = 200, description = "`json` returns the enveloped export; `csv` returns a `text/csv` attachment.", body = ContactExportDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Missing or unknown format.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact messages"
)]
pub async fn export(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    QueryParams(query): QueryParams<ExportContactMessagesQuery>,
) -> HttpResult<Response> {
    let export = state
        .services
        .contact_message_queries
        .export(query)
        .await
        .into_http()?;

    Ok(match export {
        ContactExport::Json(dto) => Envelope::ok(dto).into_response(),
        ContactExport::Csv { file_name, body } => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{file_name}\""),
                ),
            ],
            body,
        )
            .into_response(),
    })
}

#[utoipa::path(
    get,
    path = "/api/contact-messages/{id}",
    params(("id" = i64, Path, description = "Message id")),
    responses(
        (status = 200, description = "The message; a new message is marked read.", body = ContactMessageDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact messages"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<ContactMessageDto>> {
    state
        .services
        .contact_message_commands
        .open(id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    put,
    path = "/api/contact-messages/{id}",
    params(("id" = i64, Path, description = "Message id")),
    request_body = UpdateContactMessageCommand,
    responses(
        (status = 200, description = "Message updated.", body = ContactMessageDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact messages"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdateContactMessageCommand>,
) -> HttpResult<Envelope<ContactMessageDto>> {
    let message = state
        .services
        .contact_message_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        message,
        "Contact message updated successfully",
    ))
}

#[utoipa::path(
    patch,
    path = "/api/contact-messages/{id}/status",
    params(("id" = i64, Path, description = "Message id")),
    request_body = UpdateContactStatusCommand,
    responses(
        (status = 200, description = "Status changed.", body = ContactMessageDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Unknown status.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact messages"
)]
pub async fn update_status(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdateContactStatusCommand>,
) -> HttpResult<Envelope<ContactMessageDto>> {
    let message = state
        .services
        .contact_message_commands
        .update_status(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(message, "Status updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/contact-messages/{id}",
    params(("id" = i64, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact messages"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .contact_message_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("Contact message deleted successfully"))
}

#[utoipa::path(
    post,
    path = "/api/contact-messages/bulk-update",
    request_body = BulkUpdateContactMessagesCommand,
    responses(
        (status = 200, description = "Number of messages touched.", body = AffectedDto),
        (status = 422, description = "Unknown action.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact messages"
)]
pub async fn bulk_update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<BulkUpdateContactMessagesCommand>,
) -> HttpResult<Envelope<AffectedDto>> {
    let message = bulk_message(&command.action);
    let affected = state
        .services
        .contact_message_commands
        .bulk_update(command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(affected, message))
}

fn bulk_message(action: &str) -> &'static str {
    match action {
        "mark_read" => "Messages marked as read",
        "mark_replied" => "Messages marked as replied",
        "mark_closed" => "Messages marked as closed",
        "delete" => "Messages deleted successfully",
        _ => "Messages updated successfully",
    }
}
