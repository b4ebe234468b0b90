// src/presentation/http/extractors.rs
use crate::{
    application::{
        commands::contact_messages::ClientInfo, dto::AuthenticatedUser,
        services::media::UploadedFile, validation::FieldErrors,
    },
    presentation::http::state::HttpState,
};
use axum::{
    Json,
    extract::{
        ConnectInfo, FromRequest, FromRequestParts, Multipart, Path, Query, Request,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, header::USER_AGENT, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;
use std::net::SocketAddr;

use super::error::HttpError;

const UNAUTHENTICATED: &str = "Unauthenticated";

fn app_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts
        .extensions
        .get::<HttpState>()
        .cloned()
        .ok_or_else(HttpError::internal)
}

fn bearer(headers: &HeaderMap) -> Result<String, HttpError> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
        .ok_or_else(|| HttpError::unauthorized(UNAUTHENTICATED))
}

/// A verified, unrevoked bearer token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = app_state(parts)?;
        let token = bearer(&parts.headers)?;
        let user = state
            .services
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self(user))
    }
}

/// The raw bearer token, checked later by the handler (refresh).
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer(&parts.headers).map(Self)
    }
}

/// Integer path id. Anything else is reported as a missing resource.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for IdPath {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::not_found("Resource not found"))?;
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| HttpError::not_found("Resource not found"))
    }
}

/// `Json<T>` whose rejections use the error envelope with status 422.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection: JsonRejection| HttpError::unprocessable(rejection.body_text()))
    }
}

/// `Query<T>` whose rejections use the error envelope with status 422.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection: QueryRejection| HttpError::unprocessable(rejection.body_text()))
    }
}

/// Caller address and user agent of a request.
#[derive(Debug, Clone, Default)]
pub struct ClientMeta(pub ClientInfo);

impl<S: Send + Sync> FromRequestParts<S> for ClientMeta {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(first_hop);
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());
        let user_agent = parts
            .headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        Ok(Self(ClientInfo {
            ip_address: forwarded.or(peer),
            user_agent,
        }))
    }
}

fn first_hop(header: &str) -> Option<String> {
    header
        .split(',')
        .next()
        .map(str::trim)
        .filter(|hop| !hop.is_empty())
        .map(ToString::to_string)
}

/// Multipart form whose rejections use the error envelope with status 422.
pub struct Uploads(pub Multipart);

impl<S: Send + Sync> FromRequest<S> for Uploads {
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Multipart::from_request(req, state)
            .await
            .map(Self)
            .map_err(|rejection| HttpError::unprocessable(rejection.body_text()))
    }
}

impl Uploads {
    /// The single file sent as `field`.
    pub async fn single(self, field: &str) -> Result<UploadedFile, HttpError> {
        let mut files = self.collect(|name| name == field).await?;
        if files.is_empty() {
            return Err(HttpError::invalid(FieldErrors::single(
                field,
                format!("The {field} field is required."),
            )));
        }
        Ok(files.swap_remove(0))
    }

    /// Every file sent as `field`, `field[]` or `field[n]`, labelled `field.n`.
    pub async fn many(self, field: &str) -> Result<Vec<UploadedFile>, HttpError> {
        let mut files = self
            .collect(|name| name == field || name.starts_with(&format!("{field}[")))
            .await?;
        if files.is_empty() {
            return Err(HttpError::invalid(FieldErrors::single(
                field,
                format!("The {field} field is required."),
            )));
        }
        for (index, file) in files.iter_mut().enumerate() {
            file.field = format!("{field}.{index}");
        }
        Ok(files)
    }

    async fn collect(self, wanted: impl Fn(&str) -> bool) -> Result<Vec<UploadedFile>, HttpError> {
        let Self(mut multipart) = self;
        let mut files = Vec::new();
        while let Some(part) = multipart
            .next_field()
            .await
            .map_err(|err| HttpError::unprocessable(err.body_text()))?
        {
            let name = part.name().unwrap_or_default().to_string();
            if !wanted(&name) || part.file_name().is_none() {
                continue;
            }
            let file_name = part.file_name().unwrap_or_default().to_string();
            let content_type = part.content_type().map(ToString::to_string);
            let bytes = part
                .bytes()
                .await
                .map_err(|err| HttpError::unprocessable(err.body_text()))?;
            files.push(UploadedFile {
                field: name,
                file_name,
                content_type,
                bytes,
            });
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_forwarded_hop_wins() {
        assert_eq!(
            first_hop("203.0.113.7, 10.0.0.1"),
            Some("203.0.113.7".to_string())
        );
        assert_eq!(first_hop(" "), None);
    }
}
