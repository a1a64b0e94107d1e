//! Item data repository.
//!
//! Catalog reads: single item, items by owner, text search over available items, and
//! items listed against item requests.

use crate::server::{
    model::item::{Item, NewItem},
    util::page::OffsetPage,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new item.
    ///
    /// # Returns
    /// - `Ok(Item)`: The created item
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, item: NewItem) -> Result<Item, DbErr> {
        let entity = entity::item::ActiveModel {
            name: ActiveValue::Set(item.name),
            description: ActiveValue::Set(item.description),
            available: ActiveValue::Set(item.available),
            owner_id: ActiveValue::Set(item.owner_id),
            request_id: ActiveValue::Set(item.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Item::from_entity(entity))
    }

    /// Gets an item by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Item>, DbErr> {
        let entity = entity::prelude::Item::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Item::from_entity))
    }

    /// Updates the mutable columns of an item.
    ///
    /// Owner and request link are never written here.
    ///
    /// # Arguments
    /// - `id`: Item ID
    /// - `name`: Optional new name
    /// - `description`: Optional new description
    /// - `available`: Optional new availability
    ///
    /// # Returns
    /// - `Ok(Some(Item))`: The updated item
    /// - `Ok(None)`: Item not found
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        description: Option<String>,
        available: Option<bool>,
    ) -> Result<Option<Item>, DbErr> {
        let Some(existing) = entity::prelude::Item::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::item::ActiveModel = existing.into();
        if let Some(name) = name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(available) = available {
            active.available = ActiveValue::Set(available);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Item::from_entity(entity)))
    }

    /// Gets a page of items owned by `owner_id`, ascending by id.
    pub async fn find_by_owner(&self, owner_id: i32, page: OffsetPage) -> Result<Vec<Item>, DbErr> {
        let query = entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::item::Column::Id);

        let entities = page.apply(query).all(self.db).await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Searches available items whose name or description contains `text`.
    ///
    /// Matching is a case-insensitive substring match with Unicode case folding, done
    /// after loading the available items since SQLite `LIKE` only folds ASCII and treats
    /// `%`/`_` as wildcards. Results are ascending by id. The caller is responsible for
    /// short-circuiting blank queries.
    pub async fn search(&self, text: &str, page: OffsetPage) -> Result<Vec<Item>, DbErr> {
        let needle = text.to_lowercase();

        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::Available.eq(true))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        let hits = entities
            .into_iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .map(Item::from_entity)
            .collect();

        Ok(page.slice(hits))
    }

    /// Gets every item listed against any of `request_ids`, ascending by id.
    pub async fn find_by_requests(&self, request_ids: &[i32]) -> Result<Vec<Item>, DbErr> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.is_in(request_ids.iter().copied()))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }
}
