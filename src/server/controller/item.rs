use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        item::{
            CommentDto, CreateCommentDto, CreateItemDto, ItemDetailsDto, ItemDto, UpdateItemDto,
        },
    },
    server::{
        controller::PageQuery,
        error::AppError,
        middleware::auth::SharerUserId,
        model::{
            comment::CreateCommentParams,
            item::{CreateItemParams, ItemView, UpdateItemParams, Viewer},
        },
        service::item::ItemService,
        state::AppState,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring matched against name and description, case-insensitive.
    pub text: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

fn into_dtos(views: Vec<ItemView>) -> Vec<ItemDetailsDto> {
    views.into_iter().map(ItemView::into_dto).collect()
}

/// List a new item.
///
/// # Returns
/// - `201 Created` - Item listed
/// - `400 Bad Request` - Missing or blank fields
/// - `404 Not Found` - Caller or referenced request not found
#[utoipa::path(
    post,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item listed", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 404, description = "User or request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Json(payload): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db)
        .create(user_id, CreateItemParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Partially update an item.
///
/// # Access Control
/// - Owner of the item
#[utoipa::path(
    patch,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Item updated", body = ItemDto),
        (status = 400, description = "Blank name or description", body = ErrorDto),
        (status = 403, description = "Caller does not own the item", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(item_id): Path<i32>,
    Json(payload): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db)
        .update(user_id, item_id, UpdateItemParams::from_dto(payload))
        .await?;

    Ok(Json(item.into_dto()))
}

/// Get an item with its comments.
///
/// The owner additionally sees the last and next booking.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemDetailsDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let view = ItemService::new(&state.db)
        .get(Viewer::new(user_id), item_id)
        .await?;

    Ok(Json(view.into_dto()))
}

/// List the caller's items, ascending by id.
#[utoipa::path(
    get,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Items owned by the caller", body = Vec<ItemDetailsDto>),
        (status = 400, description = "Invalid page", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_items(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.into_page()?;

    let views = ItemService::new(&state.db)
        .get_by_owner(user_id, page)
        .await?;

    Ok(Json(into_dtos(views)))
}

/// Search available items.
///
/// An empty or missing `text` returns an empty list.
#[utoipa::path(
    get,
    path = "/items/search",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        SearchQuery
    ),
    responses(
        (status = 200, description = "Matching available items", body = Vec<ItemDetailsDto>),
        (status = 400, description = "Invalid page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_items(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageQuery {
        from: query.from,
        size: query.size,
    }
    .into_page()?;

    let views = ItemService::new(&state.db)
        .search(Viewer::new(user_id), query.text.as_deref(), page)
        .await?;

    Ok(Json(into_dtos(views)))
}

/// Comment on an item the caller has finished renting.
#[utoipa::path(
    post,
    path = "/items/{item_id}/comment",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Comment posted", body = CommentDto),
        (status = 400, description = "Invalid text or no completed booking", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(item_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = ItemService::new(&state.db)
        .add_comment(user_id, item_id, CreateCommentParams::from_dto(payload))
        .await?;

    Ok(Json(comment.into_dto()))
}
