//! Item request service.
//!
//! Users post requests for items nobody has listed; other users can browse them and
//! list items against a request. Every read attaches the items listed so far.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{item::ItemRepository, item_request::ItemRequestRepository},
    error::{field::ValidationErrors, AppError},
    model::{
        item::Item,
        item_request::{CreateItemRequestParams, ItemRequest, ItemRequestWithItems},
    },
    service::user::UserService,
    util::{page::OffsetPage, validate},
};

const MAX_DESCRIPTION_LENGTH: usize = 255;

pub struct ItemRequestService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ItemRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a new item request.
    ///
    /// # Returns
    /// - `Ok(ItemRequestWithItems)` - The request, with no items yet
    /// - `Err(AppError::Validation)` - Description blank or longer than 255 characters
    /// - `Err(AppError::NotFound)` - Requestor does not exist
    pub async fn create(
        &self,
        requestor_id: i32,
        params: CreateItemRequestParams,
    ) -> Result<ItemRequestWithItems, AppError> {
        let mut errors = ValidationErrors::new();
        let description =
            validate::require_text(&mut errors, "description", params.description.as_deref());
        if let Some(description) = description {
            validate::max_chars(&mut errors, "description", description, MAX_DESCRIPTION_LENGTH);
        }
        let (Some(description), true) = (description, errors.is_empty()) else {
            return Err(errors.into());
        };

        UserService::new(self.db).require(requestor_id).await?;

        let request = ItemRequestRepository::new(self.db)
            .create(requestor_id, description.to_string(), Utc::now())
            .await?;

        tracing::info!("User {} posted item request {}", requestor_id, request.id);

        Ok(ItemRequestWithItems {
            request,
            items: Vec::new(),
        })
    }

    /// Gets the requestor's own requests, newest first.
    pub async fn get_own(&self, requestor_id: i32) -> Result<Vec<ItemRequestWithItems>, AppError> {
        UserService::new(self.db).require(requestor_id).await?;

        let requests = ItemRequestRepository::new(self.db)
            .find_by_requestor(requestor_id)
            .await?;

        self.attach_items(requests).await
    }

    /// Gets a page of other users' requests, newest first.
    pub async fn get_all(
        &self,
        user_id: i32,
        page: OffsetPage,
    ) -> Result<Vec<ItemRequestWithItems>, AppError> {
        UserService::new(self.db).require(user_id).await?;

        let requests = ItemRequestRepository::new(self.db)
            .find_all_except(user_id, page)
            .await?;

        self.attach_items(requests).await
    }

    /// Gets one request by id.
    ///
    /// # Returns
    /// - `Ok(ItemRequestWithItems)` - The request and its items
    /// - `Err(AppError::NotFound)` - Caller or request does not exist
    pub async fn get_by_id(
        &self,
        user_id: i32,
        request_id: i32,
    ) -> Result<ItemRequestWithItems, AppError> {
        UserService::new(self.db).require(user_id).await?;

        let request = ItemRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "requestId",
                    format!("Item request with id {} not found", request_id),
                )
            })?;

        let mut attached = self.attach_items(vec![request]).await?;

        attached.pop().ok_or_else(|| {
            AppError::not_found(
                "requestId",
                format!("Item request with id {} not found", request_id),
            )
        })
    }

    /// Loads the items of every request in one query and groups them per request.
    async fn attach_items(
        &self,
        requests: Vec<ItemRequest>,
    ) -> Result<Vec<ItemRequestWithItems>, AppError> {
        let ids: Vec<i32> = requests.iter().map(|request| request.id).collect();
        let items = ItemRepository::new(self.db).find_by_requests(&ids).await?;

        let mut by_request: HashMap<i32, Vec<Item>> = HashMap::new();
        for item in items {
            if let Some(request_id) = item.request_id {
                by_request.entry(request_id).or_default().push(item);
            }
        }

        Ok(requests
            .into_iter()
            .map(|request| ItemRequestWithItems {
                items: by_request.remove(&request.id).unwrap_or_default(),
                request,
            })
            .collect())
    }
}
