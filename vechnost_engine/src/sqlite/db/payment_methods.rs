use sqlx::SqliteConnection;

use crate::{
    db_types::{NewPaymentMethod, PaymentMethod},
    traits::CatalogError,
};

pub(crate) async fn insert_payment_method(
    method: NewPaymentMethod,
    conn: &mut SqliteConnection,
) -> Result<PaymentMethod, CatalogError> {
    let code = method.code.clone();
    let result = sqlx::query_as::<_, PaymentMethod>(
        r#"INSERT INTO payment_methods (name, code, gateway, fee_percent, fee_flat, is_active)
           VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"#,
    )
    .bind(method.name)
    .bind(method.code)
    .bind(method.gateway)
    .bind(method.fee_percent)
    .bind(method.fee_flat)
    .bind(method.is_active)
    .fetch_one(conn)
    .await;
    match result {
        Ok(method) => Ok(method),
        Err(sqlx::Error::Database(de)) if de.is_unique_violation() => Err(CatalogError::DuplicateMethodCode(code)),
        Err(e) => Err(e.into()),
    }
}

pub(crate) async fn fetch_active_payment_methods(
    conn: &mut SqliteConnection,
) -> Result<Vec<PaymentMethod>, CatalogError> {
    let methods =
        sqlx::query_as::<_, PaymentMethod>(r#"SELECT * FROM payment_methods WHERE is_active = 1 ORDER BY id"#)
            .fetch_all(conn)
            .await?;
    Ok(methods)
}

pub(crate) async fn fetch_active_payment_method_by_code(
    code: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<PaymentMethod>, CatalogError> {
    let method = sqlx::query_as::<_, PaymentMethod>(
        r#"SELECT * FROM payment_methods WHERE code = $1 AND is_active = 1 LIMIT 1"#,
    )
    .bind(code)
    .fetch_optional(conn)
    .await?;
    Ok(method)
}

pub(crate) async fn delete_payment_method(id: i64, conn: &mut SqliteConnection) -> Result<bool, CatalogError> {
    let result = sqlx::query(r#"DELETE FROM payment_methods WHERE id = $1"#).bind(id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}
