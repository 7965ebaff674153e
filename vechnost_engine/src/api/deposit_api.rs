use std::fmt::Debug;

use log::*;
use vechnost_common::Money;

use crate::{
    api::objects::DepositQueryFilter,
    db_types::{Deposit, NewDeposit},
    traits::{DepositError, DepositManagement},
};

/// `DepositApi` records wallet top-ups and lets admins browse them.
pub struct DepositApi<B> {
    db: B,
}

impl<B> Debug for DepositApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DepositApi")
    }
}

impl<B> DepositApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> DepositApi<B>
where B: DepositManagement
{
    /// Records a deposit request. The referenced user is not checked; reconciliation against
    /// accounts happens out of band.
    pub async fn create_deposit(&self, deposit: NewDeposit) -> Result<Deposit, DepositError> {
        if deposit.amount < Money::ZERO {
            return Err(DepositError::InvalidAmount(deposit.amount));
        }
        let deposit = self.db.insert_deposit(deposit).await?;
        debug!("💰️ Deposit {} of {} recorded for user {}", deposit.id, deposit.amount, deposit.user_id);
        Ok(deposit)
    }

    pub async fn search_deposits(&self, query: DepositQueryFilter) -> Result<Vec<Deposit>, DepositError> {
        self.db.search_deposits(query).await
    }
}
