use crate::server::{
    error::AppError,
    model::booking::{BookingState, BookingStatus, CreateBookingParams},
    service::booking::BookingService,
    util::page::OffsetPage,
};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod approve;
mod create;
mod get;
mod list;
