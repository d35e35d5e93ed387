use super::actor::Actor;
use super::asset::{CashInOut, RegCashOut};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Use-case collaborator owning cash-in-out records and their lifecycle.
#[async_trait]
pub trait AssetService: Send + Sync {
    /// Withdrawal requests of `actor` still awaiting processing, in the
    /// service's order.
    async fn find_unprocessed_cash_out(&self, actor: &Actor) -> Result<Vec<CashInOut>>;

    /// Registers a withdrawal request and returns the id of the created record.
    async fn withdraw(&self, param: RegCashOut) -> Result<String>;
}

pub type AssetServiceRef = Arc<dyn AssetService>;
