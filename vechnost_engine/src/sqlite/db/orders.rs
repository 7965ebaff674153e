use log::*;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::{
    api::objects::OrderQueryFilter,
    db_types::{NewOrder, Order, OrderStatus, PaymentGateway},
    traits::OrderFlowError,
};

/// Inserts a priced order. New orders always start out pending; the gateway instruction on
/// [`NewOrder`] is handled separately by [`attach_checkout_url`].
pub(crate) async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, OrderFlowError> {
    let order = sqlx::query_as::<_, Order>(
        r#"INSERT INTO orders
           (user_id, product_id, amount, target_id, provider, payment_method_code, payment_reference, total_price, note)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *"#,
    )
    .bind(order.user_id)
    .bind(order.product_id)
    .bind(order.amount)
    .bind(order.target_id)
    .bind(order.provider)
    .bind(order.payment_method_code)
    .bind(order.payment_reference)
    .bind(order.total_price)
    .bind(order.note)
    .fetch_one(conn)
    .await?;
    Ok(order)
}

/// Writes the mock checkout URL for a hosted gateway onto an existing order. The URL embeds the
/// order id, so this can only run once the row exists.
pub(crate) async fn attach_checkout_url(
    order_id: i64,
    gateway: PaymentGateway,
    conn: &mut SqliteConnection,
) -> Result<Order, OrderFlowError> {
    let url = format!("https://pay.mock/{gateway}/{order_id}");
    let order = sqlx::query_as::<_, Order>(r#"UPDATE orders SET payment_url = $1 WHERE id = $2 RETURNING *"#)
        .bind(url)
        .bind(order_id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| OrderFlowError::OrderNotFound(order_id.to_string()))?;
    Ok(order)
}

pub(crate) async fn fetch_order(id: i64, conn: &mut SqliteConnection) -> Result<Option<Order>, OrderFlowError> {
    let order =
        sqlx::query_as::<_, Order>(r#"SELECT * FROM orders WHERE id = $1"#).bind(id).fetch_optional(conn).await?;
    Ok(order)
}

pub(crate) async fn fetch_order_by_payment_reference(
    reference: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, OrderFlowError> {
    let order = sqlx::query_as::<_, Order>(r#"SELECT * FROM orders WHERE payment_reference = $1 LIMIT 1"#)
        .bind(reference)
        .fetch_optional(conn)
        .await?;
    Ok(order)
}

pub(crate) async fn update_order_status(
    id: i64,
    status: OrderStatus,
    conn: &mut SqliteConnection,
) -> Result<Order, OrderFlowError> {
    let order = sqlx::query_as::<_, Order>(
        r#"UPDATE orders SET status = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2 RETURNING *"#,
    )
    .bind(status)
    .bind(id)
    .fetch_optional(conn)
    .await?
    .ok_or_else(|| OrderFlowError::OrderNotFound(id.to_string()))?;
    Ok(order)
}

pub(crate) async fn search_orders(
    query: OrderQueryFilter,
    conn: &mut SqliteConnection,
) -> Result<Vec<Order>, OrderFlowError> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM orders");
    if !query.is_empty() {
        builder.push(" WHERE ");
    }
    let mut where_clause = builder.separated(" AND ");
    if let Some(status) = query.status {
        where_clause.push("status = ");
        where_clause.push_bind_unseparated(status);
    }
    if let Some(user_id) = query.user_id {
        where_clause.push("user_id = ");
        where_clause.push_bind_unseparated(user_id);
    }
    builder.push(" ORDER BY id");
    trace!("📝️ Executing query: {}", builder.sql());
    let orders = builder.build_query_as::<Order>().fetch_all(conn).await?;
    Ok(orders)
}
