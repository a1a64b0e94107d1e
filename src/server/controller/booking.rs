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
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        controller::PageQuery,
        error::AppError,
        middleware::auth::SharerUserId,
        model::booking::{BookingState, BookingWithItem, CreateBookingParams},
        service::booking::BookingService,
        state::AppState,
        util::page::OffsetPage,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DecisionQuery {
    /// `true` approves the booking, `false` rejects it.
    pub approved: bool,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingListQuery {
    /// `ALL`, `CURRENT`, `PAST`, `FUTURE`, `WAITING` or `REJECTED`; defaults to `ALL`.
    pub state: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

impl BookingListQuery {
    fn parse(self) -> Result<(BookingState, OffsetPage), AppError> {
        let state = BookingState::parse(self.state.as_deref())?;
        let page = PageQuery {
            from: self.from,
            size: self.size,
        }
        .into_page()?;

        Ok((state, page))
    }
}

fn into_dtos(bookings: Vec<BookingWithItem>) -> Vec<BookingDto> {
    bookings.into_iter().map(BookingWithItem::into_dto).collect()
}

/// Book an item.
///
/// # Access Control
/// - Any existing user except the owner of the item
///
/// # Returns
/// - `201 Created` - Booking created with status `WAITING`
/// - `400 Bad Request` - Invalid dates, item unavailable or already booked
/// - `403 Forbidden` - Caller owns the item
/// - `404 Not Found` - Caller or item not found
#[utoipa::path(
    post,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking", body = ErrorDto),
        (status = 403, description = "Owner cannot book own item", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .create(user_id, CreateBookingParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Approve or reject a waiting booking.
///
/// # Access Control
/// - Owner of the booked item
///
/// # Returns
/// - `200 OK` - Booking with its new status
/// - `400 Bad Request` - Booking already decided
/// - `403 Forbidden` - Caller does not own the item
/// - `404 Not Found` - Booking not found
#[utoipa::path(
    patch,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        ("booking_id" = i32, Path, description = "Booking ID"),
        DecisionQuery
    ),
    responses(
        (status = 200, description = "Booking decided", body = BookingDto),
        (status = 400, description = "Booking already decided", body = ErrorDto),
        (status = 403, description = "Caller does not own the item", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(booking_id): Path<i32>,
    Query(query): Query<DecisionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .approve(user_id, booking_id, query.approved)
        .await?;

    Ok(Json(booking.into_dto()))
}

/// Get a booking.
///
/// # Access Control
/// - The booker or the owner of the booked item
#[utoipa::path(
    get,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking found", body = BookingDto),
        (status = 403, description = "Caller is neither booker nor owner", body = ErrorDto),
        (status = 404, description = "User or booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .get(user_id, booking_id)
        .await?;

    Ok(Json(booking.into_dto()))
}

/// List the caller's bookings, newest start first.
#[utoipa::path(
    get,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        BookingListQuery
    ),
    responses(
        (status = 200, description = "Bookings made by the caller", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid page", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booker_bookings(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (booking_state, page) = query.parse()?;

    let bookings = BookingService::new(&state.db)
        .get_by_booker(user_id, booking_state, page)
        .await?;

    Ok(Json(into_dtos(bookings)))
}

/// List bookings on the caller's items, newest start first.
#[utoipa::path(
    get,
    path = "/bookings/owner",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        BookingListQuery
    ),
    responses(
        (status = 200, description = "Bookings on the caller's items", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid page", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_bookings(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (booking_state, page) = query.parse()?;

    let bookings = BookingService::new(&state.db)
        .get_by_owner(user_id, booking_state, page)
        .await?;

    Ok(Json(into_dtos(bookings)))
}
