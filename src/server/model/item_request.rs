//! Item request domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::item_request::{CreateItemRequestDto, ItemRequestDto},
    server::model::item::Item,
};

/// A standing ask for an item that nobody has listed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequest {
    pub id: i32,
    pub description: String,
    pub requestor_id: i32,
    pub created: DateTime<Utc>,
}

impl ItemRequest {
    pub fn from_entity(entity: entity::item_request::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            requestor_id: entity.requestor_id,
            created: entity.created,
        }
    }
}

/// Request together with the items listed against it, ascending by item id.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequestWithItems {
    pub request: ItemRequest,
    pub items: Vec<Item>,
}

impl ItemRequestWithItems {
    pub fn into_dto(self) -> ItemRequestDto {
        ItemRequestDto {
            id: self.request.id,
            description: self.request.description,
            requestor_id: self.request.requestor_id,
            created: self.request.created,
            items: self.items.into_iter().map(Item::into_dto).collect(),
        }
    }
}

/// Parameters for posting an item request.
#[derive(Debug, Clone)]
pub struct CreateItemRequestParams {
    pub description: Option<String>,
}

impl CreateItemRequestParams {
    pub fn from_dto(dto: CreateItemRequestDto) -> Self {
        Self {
            description: dto.description,
        }
    }
}
