//! HTTP request handlers.
//!
//! Controllers extract the acting user, path, query and JSON body, convert DTOs into
//! operation parameters, call the matching service and convert the domain result
//! back into a DTO. Business rules live in the services.

pub mod booking;
pub mod item;
pub mod item_request;
pub mod user;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{error::AppError, util::page::OffsetPage};

/// Offset pagination query shared by list endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Row offset, defaults to 0.
    pub from: Option<i64>,
    /// Page length, all remaining rows when absent.
    pub size: Option<i64>,
}

impl PageQuery {
    pub fn into_page(self) -> Result<OffsetPage, AppError> {
        OffsetPage::new(self.from, self.size)
    }
}
