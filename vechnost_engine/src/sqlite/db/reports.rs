use sqlx::SqliteConnection;

use crate::{
    api::objects::AdminOverview,
    db_types::{Order, OrderStatus, ProductSales},
    traits::ReportError,
};

/// Aggregates every order, regardless of status, into per-product sales figures. Rows come back
/// busiest first, with ties broken by ascending product id.
pub(crate) async fn product_sales(limit: i64, conn: &mut SqliteConnection) -> Result<Vec<ProductSales>, ReportError> {
    let sales = sqlx::query_as::<_, ProductSales>(
        r#"SELECT product_id, COUNT(*) AS orders, SUM(total_price) AS revenue
           FROM orders GROUP BY product_id
           ORDER BY orders DESC, product_id LIMIT $1"#,
    )
    .bind(limit.max(0))
    .fetch_all(conn)
    .await?;
    Ok(sales)
}

pub(crate) async fn overview(conn: &mut SqliteConnection) -> Result<AdminOverview, ReportError> {
    let users = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM users"#).fetch_one(&mut *conn).await?;
    let products = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM products"#).fetch_one(&mut *conn).await?;
    let orders = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM orders"#).fetch_one(&mut *conn).await?;
    let deposits = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM deposits"#).fetch_one(&mut *conn).await?;
    let pending_orders = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM orders WHERE status = $1"#)
        .bind(OrderStatus::Pending)
        .fetch_one(&mut *conn)
        .await?;
    let paid_orders = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM orders WHERE status = $1"#)
        .bind(OrderStatus::Paid)
        .fetch_one(&mut *conn)
        .await?;
    let recent_orders =
        sqlx::query_as::<_, Order>(r#"SELECT * FROM orders ORDER BY created_at DESC, id DESC LIMIT 10"#)
            .fetch_all(conn)
            .await?;
    Ok(AdminOverview { users, products, orders, deposits, pending_orders, paid_orders, recent_orders })
}

pub(crate) async fn list_tables(conn: &mut SqliteConnection) -> Result<Vec<String>, ReportError> {
    let tables = sqlx::query_scalar::<_, String>(
        r#"SELECT name FROM sqlite_master
           WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations'
           ORDER BY name"#,
    )
    .fetch_all(conn)
    .await?;
    Ok(tables)
}
