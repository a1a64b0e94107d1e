use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        item_request::{CreateItemRequestDto, ItemRequestDto},
    },
    server::{
        controller::PageQuery,
        error::AppError,
        middleware::auth::SharerUserId,
        model::item_request::{CreateItemRequestParams, ItemRequestWithItems},
        service::item_request::ItemRequestService,
        state::AppState,
    },
};

/// Tag for grouping item request endpoints in OpenAPI documentation
pub static ITEM_REQUEST_TAG: &str = "request";

fn into_dtos(requests: Vec<ItemRequestWithItems>) -> Vec<ItemRequestDto> {
    requests
        .into_iter()
        .map(ItemRequestWithItems::into_dto)
        .collect()
}

/// Post a request for an item.
#[utoipa::path(
    post,
    path = "/requests",
    tag = ITEM_REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = CreateItemRequestDto,
    responses(
        (status = 201, description = "Request posted", body = ItemRequestDto),
        (status = 400, description = "Invalid description", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Json(payload): Json<CreateItemRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let request = ItemRequestService::new(&state.db)
        .create(user_id, CreateItemRequestParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// List the caller's own requests, newest first.
#[utoipa::path(
    get,
    path = "/requests",
    tag = ITEM_REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Requests posted by the caller", body = Vec<ItemRequestDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_item_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
) -> Result<impl IntoResponse, AppError> {
    let requests = ItemRequestService::new(&state.db).get_own(user_id).await?;

    Ok(Json(into_dtos(requests)))
}

/// List other users' requests, newest first.
#[utoipa::path(
    get,
    path = "/requests/all",
    tag = ITEM_REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Requests posted by other users", body = Vec<ItemRequestDto>),
        (status = 400, description = "Invalid page", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_item_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.into_page()?;

    let requests = ItemRequestService::new(&state.db)
        .get_all(user_id, page)
        .await?;

    Ok(Json(into_dtos(requests)))
}

/// Get a request with the items listed against it.
#[utoipa::path(
    get,
    path = "/requests/{request_id}",
    tag = ITEM_REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        ("request_id" = i32, Path, description = "Item request ID")
    ),
    responses(
        (status = 200, description = "Request found", body = ItemRequestDto),
        (status = 404, description = "User or request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let request = ItemRequestService::new(&state.db)
        .get_by_id(user_id, request_id)
        .await?;

    Ok(Json(request.into_dto()))
}
