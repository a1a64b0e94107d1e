use crate::server::{
    error::AppError,
    model::{
        booking::CreateBookingParams,
        comment::CreateCommentParams,
        item::{CreateItemParams, UpdateItemParams, Viewer},
    },
    service::{booking::BookingService, item::ItemService},
    util::page::OffsetPage,
};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};
use test_utils::{builder::TestBuilder, factory};

mod update;

fn comment(text: &str) -> CreateCommentParams {
    CreateCommentParams {
        text: Some(text.to_string()),
    }
}
