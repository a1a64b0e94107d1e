//! Comment domain model.

use chrono::{DateTime, Utc};

use crate::{
    model::item::{CommentDto, CreateCommentDto},
    server::error::{internal::InternalError, AppError},
};

/// Feedback left on an item by a user whose approved booking of it has ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub item_id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Converts a comment entity and its author at the repository boundary.
    pub fn from_entity(entity: entity::comment::Model, author: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            item_id: entity.item_id,
            author_id: entity.author_id,
            author_name: author.name,
            created: entity.created,
        }
    }

    /// Converts a comment row joined with its author, treating a missing author as
    /// corrupted state.
    pub fn from_joined(
        (entity, author): (entity::comment::Model, Option<entity::user::Model>),
    ) -> Result<Self, AppError> {
        let author = author.ok_or_else(|| InternalError::MissingRelation {
            entity: "user",
            id: entity.author_id,
            referenced_by: format!("comment {}", entity.id),
        })?;

        Ok(Self::from_entity(entity, author))
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            item_id: self.item_id,
            author_name: self.author_name,
            created: self.created,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub text: Option<String>,
}

impl CreateCommentParams {
    pub fn from_dto(dto: CreateCommentDto) -> Self {
        Self { text: dto.text }
    }
}
