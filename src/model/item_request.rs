use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::item::ItemDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateItemRequestDto {
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequestDto {
    pub id: i32,
    pub description: String,
    pub requestor_id: i32,
    pub created: DateTime<Utc>,
    /// Items listed in response to this request, ascending by id.
    pub items: Vec<ItemDto>,
}
