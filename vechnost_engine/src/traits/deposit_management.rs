use thiserror::Error;
use vechnost_common::Money;

use crate::{
    api::objects::DepositQueryFilter,
    db_types::{Deposit, NewDeposit},
};

#[allow(async_fn_in_trait)]
pub trait DepositManagement {
    async fn insert_deposit(&self, deposit: NewDeposit) -> Result<Deposit, DepositError>;

    async fn search_deposits(&self, query: DepositQueryFilter) -> Result<Vec<Deposit>, DepositError>;
}

#[derive(Debug, Clone, Error)]
pub enum DepositError {
    #[error("Could not connect to the database: {0}")]
    DatabaseError(String),
    #[error("Deposit amount may not be negative: {0}")]
    InvalidAmount(Money),
}

impl From<sqlx::Error> for DepositError {
    fn from(e: sqlx::Error) -> Self {
        DepositError::DatabaseError(e.to_string())
    }
}
