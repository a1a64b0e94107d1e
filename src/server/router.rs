//! Route table and API documentation.
//!
//! Handlers are registered through `utoipa-axum` so the OpenAPI document is built
//! from the same route list that axum serves.

use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        booking::{self, BOOKING_TAG},
        item::{self, ITEM_TAG},
        item_request::{self, ITEM_REQUEST_TAG},
        user::{self, USER_TAG},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "shareit", description = "Peer-to-peer item rental marketplace"),
    tags(
        (name = USER_TAG, description = "User registration and profiles"),
        (name = ITEM_TAG, description = "Item catalog and comments"),
        (name = BOOKING_TAG, description = "Booking lifecycle"),
        (name = ITEM_REQUEST_TAG, description = "Requests for items not yet listed")
    )
)]
struct ApiDoc;

/// Builds the application router with all API routes, Swagger UI and HTTP layers.
///
/// # Returns
/// - `Ok(Router)` - Router ready to serve
/// - `Err(AppError::ConfigErr)` - `CORS_ALLOWED_ORIGIN` is not a valid header value
pub fn router(config: &Config, state: AppState) -> Result<Router, AppError> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(item::create_item, item::get_owner_items))
        .routes(routes!(item::search_items))
        .routes(routes!(item::get_item, item::update_item))
        .routes(routes!(item::add_comment))
        .routes(routes!(
            booking::create_booking,
            booking::get_booker_bookings
        ))
        .routes(routes!(booking::get_owner_bookings))
        .routes(routes!(booking::get_booking, booking::decide_booking))
        .routes(routes!(
            item_request::create_item_request,
            item_request::get_own_item_requests
        ))
        .routes(routes!(item_request::get_all_item_requests))
        .routes(routes!(item_request::get_item_request))
        .split_for_parts();

    let router = router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match config.cors_allowed_origin.as_deref() {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|err| ConfigError::InvalidEnvVar {
                name: "CORS_ALLOWED_ORIGIN".to_string(),
                value: origin.to_string(),
                reason: err.to_string(),
            })?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}
