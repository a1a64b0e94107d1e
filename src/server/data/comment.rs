//! Comment data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)`: The created comment row
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        item_id: i32,
        author_id: i32,
        text: String,
        created: DateTime<Utc>,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            text: ActiveValue::Set(text),
            item_id: ActiveValue::Set(item_id),
            author_id: ActiveValue::Set(author_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets comments on an item joined with their authors, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<(comment, Option<author>)>)`: Comment rows; `None` when the author row
    ///   is missing
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_item(
        &self,
        item_id: i32,
    ) -> Result<Vec<(entity::comment::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Comment::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::comment::Column::ItemId.eq(item_id))
            .order_by_desc(entity::comment::Column::Created)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }
}
