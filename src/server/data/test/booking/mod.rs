use crate::server::{
    data::booking::BookingRepository,
    model::booking::{BookingState, BookingStatus},
    util::page::OffsetPage,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_approved;
mod find_by_owner;
mod last_next;
