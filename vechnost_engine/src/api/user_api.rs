use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{NewUser, User},
    traits::{UserError, UserManagement},
};

/// `UserApi` covers registration, credential checks and the admin-side user listing.
pub struct UserApi<B> {
    db: B,
}

impl<B> Debug for UserApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserApi")
    }
}

impl<B> UserApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> UserApi<B>
where B: UserManagement
{
    /// Registers a new account. The email must not be in use yet.
    pub async fn register(&self, user: NewUser) -> Result<User, UserError> {
        if self.db.fetch_user_by_email(&user.email).await?.is_some() {
            return Err(UserError::EmailAlreadyRegistered(user.email));
        }
        let user = self.db.insert_user(user).await?;
        debug!("👤️ User {} registered as {}", user.id, user.level);
        Ok(user)
    }

    /// Checks the given credentials and returns the matching account.
    ///
    /// The caller hashes the password before it gets here. Unknown emails and wrong passwords are
    /// indistinguishable from the outside.
    pub async fn login(&self, email: &str, password_hash: &str) -> Result<User, UserError> {
        match self.db.fetch_user_by_email(email).await? {
            Some(user) if user.password_hash == password_hash => {
                debug!("👤️ User {} logged in", user.id);
                Ok(user)
            },
            _ => Err(UserError::InvalidCredentials),
        }
    }

    pub async fn users(&self) -> Result<Vec<User>, UserError> {
        self.db.fetch_users().await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        if self.db.delete_user(id).await? {
            Ok(())
        } else {
            Err(UserError::UserNotFound(id))
        }
    }
}
