//! User service for business logic.
//!
//! This module provides the `UserService` for registering, reading, updating and
//! removing users. Other services use [`UserService::require`] to resolve the actor
//! of a request.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{field::ValidationErrors, AppError},
    model::user::{CreateUserParams, UpdateUserParams, User},
    util::validate,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `params` - Name and email as supplied by the client
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::Validation)` - Name or email missing, blank or malformed
    /// - `Err(AppError::AlreadyExists)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let mut errors = ValidationErrors::new();
        let name = validate::require_text(&mut errors, "name", params.name.as_deref());
        let email = validate::require_text(&mut errors, "email", params.email.as_deref());
        if let Some(email) = email {
            validate::email(&mut errors, "email", email);
        }

        let (Some(name), Some(email)) = (name, email) else {
            return Err(errors.into());
        };
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_taken(email, None).await? {
            return Err(email_taken(email));
        }

        let user = user_repo
            .create(name.to_string(), email.to_string())
            .await
            .map_err(|err| unique_email_violation(err, email))?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Gets all users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).find_all().await?)
    }

    /// Applies a partial update to a user.
    ///
    /// # Arguments
    /// - `id` - User to update
    /// - `params` - Fields to change; absent fields keep their values
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::Validation)` - A present field is blank or malformed
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::AlreadyExists)` - New email belongs to another user
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let mut errors = ValidationErrors::new();
        validate::reject_blank(&mut errors, "name", params.name.as_deref());
        validate::reject_blank(&mut errors, "email", params.email.as_deref());
        if let Some(email) = params.email.as_deref() {
            if !errors.contains("email") {
                validate::email(&mut errors, "email", email);
            }
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let user_repo = UserRepository::new(self.db);
        if !user_repo.exists(id).await? {
            return Err(user_not_found(id));
        }

        if let Some(email) = params.email.as_deref() {
            if user_repo.email_taken(email, Some(id)).await? {
                return Err(email_taken(email));
            }
        }

        let email = params.email.clone();
        let user = user_repo
            .update(id, params.name, params.email)
            .await
            .map_err(|err| unique_email_violation(err, email.as_deref().unwrap_or_default()))?
            .ok_or_else(|| user_not_found(id))?;

        tracing::info!("Updated user {}", user.id);

        Ok(user)
    }

    /// Deletes a user and, through cascading keys, everything they own.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(user_not_found(id));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }

    /// Ensures the acting user exists.
    ///
    /// # Returns
    /// - `Ok(())` - User exists
    /// - `Err(AppError::NotFound)` - On field `userId`
    pub async fn require(&self, id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db).exists(id).await? {
            Ok(())
        } else {
            Err(user_not_found(id))
        }
    }
}

pub(crate) fn user_not_found(id: i32) -> AppError {
    AppError::not_found("userId", format!("User with id {} not found", id))
}

fn email_taken(email: &str) -> AppError {
    AppError::already_exists("email", format!("Email {} is already registered", email))
}

/// Maps a unique index violation raised by a concurrent registration.
fn unique_email_violation(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => email_taken(email),
        _ => err.into(),
    }
}
