use crate::domain::actor::Actor;
use crate::domain::asset::{ActionStatusType, CashInOut, RegCashOut};
use crate::domain::constraints::{AbsAmount, Currency, Validate, Violation};
use crate::domain::ports::AssetServiceRef;
use crate::error::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cash-out endpoint adapter.
///
/// Translates between wire payloads and the `AssetService` command/entity
/// shapes. It holds no business rules and passes collaborator errors
/// through untouched.
#[derive(Clone)]
pub struct AssetController {
    service: AssetServiceRef,
}

impl AssetController {
    pub fn new(service: AssetServiceRef) -> Self {
        Self { service }
    }

    /// Unprocessed withdrawals of `actor`, projected in collaborator order.
    pub async fn find_unprocessed_cash_out(&self, actor: &Actor) -> Result<Vec<UserCashOut>> {
        let records = self.service.find_unprocessed_cash_out(actor).await?;
        Ok(records.iter().map(UserCashOut::of).collect())
    }

    /// Registers a withdrawal on behalf of `actor` and returns the new record id.
    pub async fn withdraw(&self, actor: &Actor, payload: ValidRegCashOut) -> Result<IdResponse> {
        let param = payload.to_param(actor.id());
        let id = self.service.withdraw(param).await?;
        tracing::info!(account_id = actor.id(), %id, "withdrawal registered");
        Ok(IdResponse { id })
    }
}

/// Raw withdrawal payload as received on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegCashOut {
    pub currency: String,
    pub abs_amount: Decimal,
}

/// A withdrawal payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRegCashOut {
    pub currency: Currency,
    pub abs_amount: AbsAmount,
}

impl ValidRegCashOut {
    /// The owning account always comes from the caller, never from the payload.
    pub fn to_param(self, account_id: &str) -> RegCashOut {
        RegCashOut::new(account_id, self.currency, self.abs_amount)
    }
}

impl Validate for UserRegCashOut {
    type Output = ValidRegCashOut;

    fn validate(self) -> std::result::Result<ValidRegCashOut, Vec<Violation>> {
        let currency = Currency::new(self.currency);
        let abs_amount = AbsAmount::new(self.abs_amount);
        match (currency, abs_amount) {
            (Ok(currency), Ok(abs_amount)) => Ok(ValidRegCashOut {
                currency,
                abs_amount,
            }),
            (currency, abs_amount) => Err(currency
                .err()
                .into_iter()
                .chain(abs_amount.err())
                .collect()),
        }
    }
}

/// Wire projection of a [`CashInOut`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCashOut {
    pub id: String,
    pub currency: String,
    pub abs_amount: Decimal,
    pub request_day: NaiveDate,
    pub request_date: NaiveDateTime,
    pub event_day: NaiveDate,
    pub value_day: NaiveDate,
    pub status_type: ActionStatusType,
    pub update_date: NaiveDateTime,
    pub cashflow_id: Option<i64>,
}

impl UserCashOut {
    pub fn of(cio: &CashInOut) -> Self {
        Self {
            id: cio.id.clone(),
            currency: cio.currency.clone(),
            abs_amount: cio.abs_amount,
            request_day: cio.request_day,
            request_date: cio.request_date,
            event_day: cio.event_day,
            value_day: cio.value_day,
            status_type: cio.status_type,
            update_date: cio.update_date,
            cashflow_id: cio.cashflow_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: String,
}
