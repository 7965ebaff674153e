use sqlx::SqliteConnection;

use crate::{
    db_types::{NewUser, User},
    traits::UserError,
};

/// Inserts a new user row. The unique index on `email` is the final authority on duplicates, even
/// when callers pre-check.
pub(crate) async fn insert_user(user: NewUser, conn: &mut SqliteConnection) -> Result<User, UserError> {
    let email = user.email.clone();
    let result = sqlx::query_as::<_, User>(
        r#"INSERT INTO users (name, email, password_hash, phone) VALUES ($1, $2, $3, $4) RETURNING *"#,
    )
    .bind(user.name)
    .bind(user.email)
    .bind(user.password_hash)
    .bind(user.phone)
    .fetch_one(conn)
    .await;
    match result {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(de)) if de.is_unique_violation() => Err(UserError::EmailAlreadyRegistered(email)),
        Err(e) => Err(e.into()),
    }
}

pub(crate) async fn fetch_user_by_email(email: &str, conn: &mut SqliteConnection) -> Result<Option<User>, UserError> {
    let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1 LIMIT 1"#)
        .bind(email)
        .fetch_optional(conn)
        .await?;
    Ok(user)
}

pub(crate) async fn fetch_users(conn: &mut SqliteConnection) -> Result<Vec<User>, UserError> {
    let users = sqlx::query_as::<_, User>(r#"SELECT * FROM users ORDER BY id"#).fetch_all(conn).await?;
    Ok(users)
}

pub(crate) async fn delete_user(id: i64, conn: &mut SqliteConnection) -> Result<bool, UserError> {
    let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#).bind(id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}
