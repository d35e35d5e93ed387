use crate::domain::constraints::{AbsAmount, Currency};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Processing status of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionStatusType {
    #[default]
    Unprocessed,
    Processing,
    Processed,
    Error,
    Cancelled,
}

impl ActionStatusType {
    /// True once no further transition is expected.
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Processed | Self::Cancelled)
    }

    /// True while the movement still awaits (re)processing.
    pub fn is_unprocessing(self) -> bool {
        matches!(self, Self::Unprocessed | Self::Error)
    }
}

/// A pending or processed cash deposit/withdrawal request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashInOut {
    pub id: String,
    pub account_id: String,
    pub currency: String,
    /// Read and written as a string so the original scale survives.
    #[serde(with = "rust_decimal::serde::str")]
    pub abs_amount: Decimal,
    /// `true` for a withdrawal, `false` for a deposit.
    pub withdrawal: bool,
    pub request_day: NaiveDate,
    pub request_date: NaiveDateTime,
    pub event_day: NaiveDate,
    pub value_day: NaiveDate,
    pub target_fi_code: Option<String>,
    pub target_fi_account_id: Option<String>,
    pub self_fi_code: Option<String>,
    pub self_fi_account_id: Option<String>,
    pub status_type: ActionStatusType,
    pub update_actor: String,
    pub update_date: NaiveDateTime,
    /// Ledger entry generated once the movement is processed.
    pub cashflow_id: Option<i64>,
}

/// Withdrawal registration command, built once per request.
#[derive(Debug, Clone, PartialEq)]
pub struct RegCashOut {
    pub account_id: String,
    pub currency: Currency,
    pub abs_amount: AbsAmount,
}

impl RegCashOut {
    pub fn new(account_id: impl Into<String>, currency: Currency, abs_amount: AbsAmount) -> Self {
        Self {
            account_id: account_id.into(),
            currency,
            abs_amount,
        }
    }
}
