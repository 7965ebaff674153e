use thiserror::Error;

use crate::db_types::{NewUser, User};

#[allow(async_fn_in_trait)]
pub trait UserManagement {
    /// Inserts a new user. Fails with [`UserError::EmailAlreadyRegistered`]
    /// when the email is taken; the unique index is the authority, not the
    /// pre-check in the API layer.
    async fn insert_user(&self, user: NewUser) -> Result<User, UserError>;

    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    async fn fetch_users(&self) -> Result<Vec<User>, UserError>;

    /// Deletes the user, returning `false` if no such row existed.
    async fn delete_user(&self, id: i64) -> Result<bool, UserError>;
}

#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Could not connect to the database: {0}")]
    DatabaseError(String),
    #[error("Email already registered")]
    EmailAlreadyRegistered(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User {0} does not exist")]
    UserNotFound(i64),
}

impl From<sqlx::Error> for UserError {
    fn from(e: sqlx::Error) -> Self {
        UserError::DatabaseError(e.to_string())
    }
}
