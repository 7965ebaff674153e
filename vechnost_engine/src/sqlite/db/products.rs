use log::*;
use sqlx::{types::Json, QueryBuilder, Sqlite, SqliteConnection};

use crate::{
    api::objects::ProductQueryFilter,
    db_types::{NewProduct, Product},
    traits::CatalogError,
};

pub(crate) async fn insert_product(product: NewProduct, conn: &mut SqliteConnection) -> Result<Product, CatalogError> {
    let product = sqlx::query_as::<_, Product>(
        r#"INSERT INTO products (title, description, price, category_id, product_type, provider, is_active, tags)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *"#,
    )
    .bind(product.title)
    .bind(product.description)
    .bind(product.price)
    .bind(product.category_id)
    .bind(product.product_type)
    .bind(product.provider)
    .bind(product.is_active)
    .bind(Json(product.tags))
    .fetch_one(conn)
    .await?;
    Ok(product)
}

pub(crate) async fn insert_products(
    products: Vec<NewProduct>,
    conn: &mut SqliteConnection,
) -> Result<usize, CatalogError> {
    let mut count = 0;
    for product in products {
        sqlx::query(
            r#"INSERT INTO products (title, description, price, category_id, product_type, provider, is_active, tags)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(product.title)
        .bind(product.description)
        .bind(product.price)
        .bind(product.category_id)
        .bind(product.product_type)
        .bind(product.provider)
        .bind(product.is_active)
        .bind(Json(product.tags))
        .execute(&mut *conn)
        .await?;
        count += 1;
    }
    Ok(count)
}

pub(crate) async fn fetch_product(id: i64, conn: &mut SqliteConnection) -> Result<Option<Product>, CatalogError> {
    let product = sqlx::query_as::<_, Product>(r#"SELECT * FROM products WHERE id = $1"#)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(product)
}

/// Searches the catalogue. The free-text term matches anywhere in the title, description or tags,
/// case-insensitively.
pub(crate) async fn search_products(
    query: ProductQueryFilter,
    conn: &mut SqliteConnection,
) -> Result<Vec<Product>, CatalogError> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM products");
    if !query.is_empty() {
        builder.push(" WHERE ");
    }
    let mut where_clause = builder.separated(" AND ");
    if let Some(category_id) = query.category_id {
        where_clause.push("category_id = ");
        where_clause.push_bind_unseparated(category_id);
    }
    if let Some(product_type) = query.product_type {
        where_clause.push("product_type = ");
        where_clause.push_bind_unseparated(product_type);
    }
    if let Some(term) = query.q {
        let pattern = format!("%{term}%");
        where_clause.push("(title LIKE ");
        where_clause.push_bind_unseparated(pattern.clone());
        where_clause.push_unseparated(" OR description LIKE ");
        where_clause.push_bind_unseparated(pattern.clone());
        where_clause
            .push_unseparated(" OR EXISTS (SELECT 1 FROM json_each(products.tags) WHERE json_each.value LIKE ");
        where_clause.push_bind_unseparated(pattern);
        where_clause.push_unseparated("))");
    }
    builder.push(" ORDER BY id");
    trace!("📝️ Executing query: {}", builder.sql());
    let products = builder.build_query_as::<Product>().fetch_all(conn).await?;
    Ok(products)
}

pub(crate) async fn delete_product(id: i64, conn: &mut SqliteConnection) -> Result<bool, CatalogError> {
    let result = sqlx::query(r#"DELETE FROM products WHERE id = $1"#).bind(id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}
