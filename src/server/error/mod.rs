//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type returned by services and controllers. Domain variants
//! carry structured field details; rendering them into a response body is left to
//! the `IntoResponse` implementation so the service layer stays free of presentation.

pub mod config;
pub mod field;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError,
        field::{FieldError, ValidationErrors},
        internal::InternalError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. The four domain kinds (`NotFound`,
/// `Validation`, `AccessDenied`, `AlreadyExists`) are raised by the service layer
/// when a business rule rejects a request; the remaining variants wrap infrastructure
/// failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Unexpected internal state.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// A referenced entity id does not exist.
    ///
    /// Results in 404 Not Found.
    #[error("{0}")]
    NotFound(FieldError),

    /// Malformed input or a business rule violation.
    ///
    /// Results in 400 Bad Request with every rejected field listed.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The actor lacks permission for the target entity.
    ///
    /// Results in 403 Forbidden.
    #[error("{0}")]
    AccessDenied(FieldError),

    /// A uniqueness constraint would be violated.
    ///
    /// Results in 409 Conflict.
    #[error("{0}")]
    AlreadyExists(FieldError),
}

impl AppError {
    pub fn not_found(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound(FieldError::new(field, message))
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(ValidationErrors::single(field, message))
    }

    pub fn access_denied(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AccessDenied(FieldError::new(field, message))
    }

    pub fn already_exists(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AlreadyExists(FieldError::new(field, message))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, body lists every failing field
/// - 403 Forbidden - For `AccessDenied`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `AlreadyExists`
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(err) => field_response(StatusCode::NOT_FOUND, err),
            Self::AccessDenied(err) => field_response(StatusCode::FORBIDDEN, err),
            Self::AlreadyExists(err) => field_response(StatusCode::CONFLICT, err),
            Self::Validation(errors) => {
                tracing::debug!("Validation failed: {}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: errors.to_string(),
                        fields: errors.into_fields(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn field_response(status: StatusCode, err: FieldError) -> Response {
    tracing::debug!("Request rejected with {}: {}", status, err);

    let mut fields = BTreeMap::new();
    fields.insert(err.field, err.message.clone());

    (
        status,
        Json(ErrorDto {
            error: err.message,
            fields,
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
                fields: BTreeMap::new(),
            }),
        )
            .into_response()
    }
}
