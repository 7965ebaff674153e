use log::*;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::{
    api::objects::DepositQueryFilter,
    db_types::{Deposit, NewDeposit},
    traits::DepositError,
};

pub(crate) async fn insert_deposit(deposit: NewDeposit, conn: &mut SqliteConnection) -> Result<Deposit, DepositError> {
    let deposit = sqlx::query_as::<_, Deposit>(
        r#"INSERT INTO deposits (user_id, amount, status, method_code, reference)
           VALUES ($1, $2, $3, $4, $5) RETURNING *"#,
    )
    .bind(deposit.user_id)
    .bind(deposit.amount)
    .bind(deposit.status)
    .bind(deposit.method_code)
    .bind(deposit.reference)
    .fetch_one(conn)
    .await?;
    Ok(deposit)
}

pub(crate) async fn search_deposits(
    query: DepositQueryFilter,
    conn: &mut SqliteConnection,
) -> Result<Vec<Deposit>, DepositError> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM deposits");
    if !query.is_empty() {
        builder.push(" WHERE ");
    }
    let mut where_clause = builder.separated(" AND ");
    if let Some(user_id) = query.user_id {
        where_clause.push("user_id = ");
        where_clause.push_bind_unseparated(user_id);
    }
    if let Some(status) = query.status {
        where_clause.push("status = ");
        where_clause.push_bind_unseparated(status);
    }
    builder.push(" ORDER BY id");
    trace!("📝️ Executing query: {}", builder.sql());
    let deposits = builder.build_query_as::<Deposit>().fetch_all(conn).await?;
    Ok(deposits)
}
