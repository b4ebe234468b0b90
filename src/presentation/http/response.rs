// src/presentation/http/response.rs
//! The `{status, message?, data}` success envelope.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SuccessBody<T> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    data: T,
}

#[derive(Debug)]
pub struct Envelope<T> {
    status: StatusCode,
    message: Option<String>,
    data: T,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: None,
            data,
        }
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: Some(message.into()),
            data,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            message: Some(message.into()),
            data,
        }
    }
}

impl Envelope<()> {
    /// `data: null` plus a message, for deletes and reorders.
    pub fn done(message: impl Into<String>) -> Self {
        Self::with_message((), message)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let body = SuccessBody {
            status: "success",
            message: self.message,
            data: self.data,
        };
        (self.status, Json(body)).into_response()
    }
}
