//! Item service for catalog business logic.
//!
//! Lists, updates and reads items, and accepts comments from users whose approved
//! booking of the item has ended. Read paths take an explicit [`Viewer`] and attach
//! the booking window only to items the viewer owns.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        comment::CommentRepository, item::ItemRepository, item_request::ItemRequestRepository,
        user::UserRepository,
    },
    error::{field::ValidationErrors, AppError},
    model::{
        comment::{Comment, CreateCommentParams},
        item::{CreateItemParams, Item, ItemView, NewItem, UpdateItemParams, Viewer},
    },
    service::{
        booking::BookingService,
        user::{user_not_found, UserService},
    },
    util::{page::OffsetPage, validate},
};

/// Longest accepted comment, in characters.
const MAX_COMMENT_LENGTH: usize = 2000;

/// Service providing business logic for the item catalog.
pub struct ItemService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    /// Creates a new ItemService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a new item owned by `owner_id`.
    ///
    /// # Arguments
    /// - `owner_id` - User listing the item
    /// - `params` - Item fields, optionally linked to an item request
    ///
    /// # Returns
    /// - `Ok(Item)` - The listed item
    /// - `Err(AppError::Validation)` - Name or description blank, availability missing
    /// - `Err(AppError::NotFound)` - Owner or referenced request does not exist
    pub async fn create(&self, owner_id: i32, params: CreateItemParams) -> Result<Item, AppError> {
        let mut errors = ValidationErrors::new();
        let name = validate::require_text(&mut errors, "name", params.name.as_deref());
        let description =
            validate::require_text(&mut errors, "description", params.description.as_deref());
        if params.available.is_none() {
            errors.add("available", "must not be null");
        }

        let (Some(name), Some(description), Some(available)) =
            (name, description, params.available)
        else {
            return Err(errors.into());
        };

        UserService::new(self.db).require(owner_id).await?;

        if let Some(request_id) = params.request_id {
            if !ItemRequestRepository::new(self.db).exists(request_id).await? {
                return Err(AppError::not_found(
                    "requestId",
                    format!("Item request with id {} not found", request_id),
                ));
            }
        }

        let item = ItemRepository::new(self.db)
            .create(NewItem {
                name: name.to_string(),
                description: description.to_string(),
                available,
                owner_id,
                request_id: params.request_id,
            })
            .await?;

        tracing::info!("User {} listed item {}", owner_id, item.id);

        Ok(item)
    }

    /// Applies a partial update to an item owned by `owner_id`.
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item
    /// - `Err(AppError::Validation)` - A present name or description is blank
    /// - `Err(AppError::NotFound)` - Item does not exist
    /// - `Err(AppError::AccessDenied)` - Caller does not own the item
    pub async fn update(
        &self,
        owner_id: i32,
        item_id: i32,
        params: UpdateItemParams,
    ) -> Result<Item, AppError> {
        let mut errors = ValidationErrors::new();
        validate::reject_blank(&mut errors, "name", params.name.as_deref());
        validate::reject_blank(&mut errors, "description", params.description.as_deref());
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let item_repo = ItemRepository::new(self.db);
        let item = item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| item_not_found(item_id))?;

        if !Viewer::new(owner_id).owns(&item) {
            return Err(AppError::access_denied(
                "itemId",
                format!("Item {} can only be edited by its owner", item_id),
            ));
        }

        if params.is_empty() {
            return Ok(item);
        }

        let item = item_repo
            .update(item_id, params.name, params.description, params.available)
            .await?
            .ok_or_else(|| item_not_found(item_id))?;

        tracing::info!("User {} updated item {}", owner_id, item.id);

        Ok(item)
    }

    /// Reads a single item with comments, plus the booking window for its owner.
    ///
    /// # Returns
    /// - `Ok(ItemView)` - The item as seen by `viewer`
    /// - `Err(AppError::NotFound)` - Item does not exist
    pub async fn get(&self, viewer: Viewer, item_id: i32) -> Result<ItemView, AppError> {
        let item = ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| item_not_found(item_id))?;

        self.view(viewer, item, true, Utc::now()).await
    }

    /// Reads a page of the owner's items, ascending by id, each with its booking
    /// window and comments.
    ///
    /// # Returns
    /// - `Ok(Vec<ItemView>)` - The owner's items
    /// - `Err(AppError::NotFound)` - Owner does not exist
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        page: OffsetPage,
    ) -> Result<Vec<ItemView>, AppError> {
        UserService::new(self.db).require(owner_id).await?;

        let items = ItemRepository::new(self.db)
            .find_by_owner(owner_id, page)
            .await?;

        let viewer = Viewer::new(owner_id);
        let now = Utc::now();
        let mut views = Vec::with_capacity(items.len());
        for item in items {
            views.push(self.view(viewer, item, true, now).await?);
        }

        Ok(views)
    }

    /// Searches available items by name or description.
    ///
    /// A missing or blank query yields an empty result rather than every item. Hits
    /// carry the booking window only when `viewer` owns them and never carry comments.
    pub async fn search(
        &self,
        viewer: Viewer,
        text: Option<&str>,
        page: OffsetPage,
    ) -> Result<Vec<ItemView>, AppError> {
        let Some(text) = text.map(str::trim).filter(|text| !text.is_empty()) else {
            return Ok(Vec::new());
        };

        let items = ItemRepository::new(self.db).search(text, page).await?;

        let now = Utc::now();
        let mut views = Vec::with_capacity(items.len());
        for item in items {
            views.push(self.view(viewer, item, false, now).await?);
        }

        Ok(views)
    }

    /// Posts a comment on an item.
    ///
    /// The author must hold at least one approved booking of the item that has
    /// already ended.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment with the author's name
    /// - `Err(AppError::NotFound)` - Author or item does not exist
    /// - `Err(AppError::Validation)` - Text blank or too long, or author has not
    ///   completed a booking of the item
    pub async fn add_comment(
        &self,
        author_id: i32,
        item_id: i32,
        params: CreateCommentParams,
    ) -> Result<Comment, AppError> {
        let author = UserRepository::new(self.db)
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| user_not_found(author_id))?;

        if ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .is_none()
        {
            return Err(item_not_found(item_id));
        }

        let mut errors = ValidationErrors::new();
        let text = validate::require_text(&mut errors, "text", params.text.as_deref());
        if let Some(text) = text {
            validate::max_chars(&mut errors, "text", text, MAX_COMMENT_LENGTH);
        }
        let (Some(text), true) = (text, errors.is_empty()) else {
            return Err(errors.into());
        };

        let now = Utc::now();
        let completed = BookingService::new(self.db)
            .approved_booking_count(item_id, author_id, Some(now))
            .await?;
        if completed == 0 {
            tracing::debug!(
                "User {} tried to comment on item {} without a completed booking",
                author_id,
                item_id
            );
            return Err(AppError::validation(
                "itemId",
                format!(
                    "User {} has not booked item {} or the booking has not ended yet",
                    author_id, item_id
                ),
            ));
        }

        let entity = CommentRepository::new(self.db)
            .create(item_id, author_id, text.to_string(), now)
            .await?;

        tracing::info!(
            "User {} commented on item {} as comment {}",
            author_id,
            item_id,
            entity.id
        );

        Ok(Comment {
            id: entity.id,
            text: entity.text,
            item_id: entity.item_id,
            author_id: entity.author_id,
            author_name: author.name,
            created: entity.created,
        })
    }

    /// Assembles the read-model of `item` for `viewer`.
    async fn view(
        &self,
        viewer: Viewer,
        item: Item,
        with_comments: bool,
        now: DateTime<Utc>,
    ) -> Result<ItemView, AppError> {
        let bookings = if viewer.owns(&item) {
            Some(BookingService::new(self.db).window_of(item.id, now).await?)
        } else {
            None
        };

        let comments = if with_comments {
            let rows = CommentRepository::new(self.db).find_by_item(item.id).await?;
            Some(
                rows.into_iter()
                    .map(Comment::from_joined)
                    .collect::<Result<Vec<_>, _>>()?,
            )
        } else {
            None
        };

        Ok(ItemView {
            item,
            bookings,
            comments,
        })
    }
}

pub(crate) fn item_not_found(id: i32) -> AppError {
    AppError::not_found("itemId", format!("Item with id {} not found", id))
}
