//! Item domain models, read-model assembly and parameters.
//!
//! Which extras an item read carries depends on who is asking. The caller passes a
//! [`Viewer`] and the service decides per item whether the booking window is
//! attached (owner only) and whether comments are attached (every read except search).

use crate::{
    model::item::{CreateItemDto, ItemDetailsDto, ItemDto, UpdateItemDto},
    server::model::{booking::BookingWindow, comment::Comment},
};

/// Listed item.
///
/// `owner_id` and `request_id` are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i32,
    pub request_id: Option<i32>,
}

impl Item {
    /// Converts an entity model to an item domain model at the repository boundary.
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            available: entity.available,
            owner_id: entity.owner_id,
            request_id: entity.request_id,
        }
    }

    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            available: self.available,
            owner_id: self.owner_id,
            request_id: self.request_id,
        }
    }
}

/// The user on whose behalf an item is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: i32,
}

impl Viewer {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }

    pub fn owns(&self, item: &Item) -> bool {
        item.owner_id == self.user_id
    }
}

/// Item read-model with the extras the viewer is entitled to.
///
/// `bookings` is `Some` only when the viewer owns the item. `comments` is `None` in
/// search results and `Some` (possibly empty) in every other read.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub item: Item,
    pub bookings: Option<BookingWindow>,
    pub comments: Option<Vec<Comment>>,
}

impl ItemView {
    pub fn into_dto(self) -> ItemDetailsDto {
        let (last_booking, next_booking) = match self.bookings {
            Some(window) => (
                window.last.map(|b| b.into_short_dto()),
                window.next.map(|b| b.into_short_dto()),
            ),
            None => (None, None),
        };

        ItemDetailsDto {
            id: self.item.id,
            name: self.item.name,
            description: self.item.description,
            available: self.item.available,
            owner_id: self.item.owner_id,
            request_id: self.item.request_id,
            last_booking,
            next_booking,
            comments: self
                .comments
                .map(|comments| comments.into_iter().map(Comment::into_dto).collect()),
        }
    }
}

/// Parameters for listing a new item.
#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub request_id: Option<i32>,
}

impl CreateItemParams {
    pub fn from_dto(dto: CreateItemDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            available: dto.available,
            request_id: dto.request_id,
        }
    }
}

/// Parameters for a partial item update.
///
/// `None` leaves the stored value untouched. None of these columns is nullable, so
/// there is no "clear" case to represent.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl UpdateItemParams {
    pub fn from_dto(dto: UpdateItemDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            available: dto.available,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.available.is_none()
    }
}

/// Validated fields for inserting an item row.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i32,
    pub request_id: Option<i32>,
}
