//! Item request data repository.

use crate::server::{model::item_request::ItemRequest, util::page::OffsetPage};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ItemRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new item request.
    pub async fn create(
        &self,
        requestor_id: i32,
        description: String,
        created: DateTime<Utc>,
    ) -> Result<ItemRequest, DbErr> {
        let entity = entity::item_request::ActiveModel {
            description: ActiveValue::Set(description),
            requestor_id: ActiveValue::Set(requestor_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ItemRequest::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ItemRequest>, DbErr> {
        let entity = entity::prelude::ItemRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ItemRequest::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all requests made by `requestor_id`, newest first.
    pub async fn find_by_requestor(&self, requestor_id: i32) -> Result<Vec<ItemRequest>, DbErr> {
        let entities = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequestorId.eq(requestor_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ItemRequest::from_entity).collect())
    }

    /// Gets a page of requests made by anyone except `user_id`, newest first.
    pub async fn find_all_except(
        &self,
        user_id: i32,
        page: OffsetPage,
    ) -> Result<Vec<ItemRequest>, DbErr> {
        let query = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequestorId.ne(user_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id);

        let entities = page.apply(query).all(self.db).await?;

        Ok(entities.into_iter().map(ItemRequest::from_entity).collect())
    }
}
