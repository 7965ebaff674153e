use sqlx::SqliteConnection;

use crate::{
    db_types::{Category, NewCategory},
    traits::CatalogError,
};

pub(crate) async fn insert_category(
    category: NewCategory,
    conn: &mut SqliteConnection,
) -> Result<Category, CatalogError> {
    let category = sqlx::query_as::<_, Category>(
        r#"INSERT INTO categories (name, slug, description, rank) VALUES ($1, $2, $3, $4) RETURNING *"#,
    )
    .bind(category.name)
    .bind(category.slug)
    .bind(category.description)
    .bind(category.rank)
    .fetch_one(conn)
    .await?;
    Ok(category)
}

pub(crate) async fn fetch_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>, CatalogError> {
    let categories =
        sqlx::query_as::<_, Category>(r#"SELECT * FROM categories ORDER BY id"#).fetch_all(conn).await?;
    Ok(categories)
}

pub(crate) async fn delete_category(id: i64, conn: &mut SqliteConnection) -> Result<bool, CatalogError> {
    let result = sqlx::query(r#"DELETE FROM categories WHERE id = $1"#).bind(id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}
