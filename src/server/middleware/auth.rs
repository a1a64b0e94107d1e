//! Acting user resolution.
//!
//! Every marketplace operation runs on behalf of a user whose id arrives in the
//! `X-Sharer-User-Id` header. The extractor only parses the header; whether the user
//! exists is decided by the service handling the request, so each operation can
//! report a missing user with its own precedence relative to other checks.

use axum::{extract::FromRequestParts, http::request::Parts};
use dioxus_logger::tracing;

use crate::server::error::AppError;

/// Header carrying the id of the acting user.
pub const SHARER_USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Id of the user on whose behalf the request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUserId(pub i32);

impl<S> FromRequestParts<S> for SharerUserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(SHARER_USER_ID_HEADER) else {
            return Err(AppError::validation(
                SHARER_USER_ID_HEADER,
                "Header is required",
            ));
        };

        let parsed = value
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<i32>().ok());

        match parsed {
            Some(id) => Ok(Self(id)),
            None => {
                tracing::debug!("Rejected malformed {} header: {:?}", SHARER_USER_ID_HEADER, value);
                Err(AppError::validation(
                    SHARER_USER_ID_HEADER,
                    "Header must be an integer user id",
                ))
            }
        }
    }
}
