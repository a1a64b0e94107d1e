use crate::server::{data::item_request::ItemRequestRepository, util::page::OffsetPage};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
