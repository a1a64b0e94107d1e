use crate::server::{
    error::AppError,
    middleware::auth::{SharerUserId, SHARER_USER_ID_HEADER},
};
use axum::{extract::FromRequestParts, http::Request};


async fn extract(header: Option<&str>) -> Result<SharerUserId, AppError> {
    let mut builder = Request::builder().uri("/items");
    if let Some(value) = header {
        builder = builder.header(SHARER_USER_ID_HEADER, value);
    }
    let (mut parts, _body) = builder.body(()).unwrap().into_parts();

    SharerUserId::from_request_parts(&mut parts, &()).await
}
