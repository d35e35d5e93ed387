use crate::domain::actor::Actor;
use crate::domain::asset::{ActionStatusType, CashInOut, RegCashOut};
use crate::domain::ports::AssetService;
use crate::error::{AssetError, Result};
use async_trait::async_trait;
use chrono::{Days, Local};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Settlement lag between the event day and the value day.
pub const VALUE_DAY_OFFSET: Days = Days::new(3);

/// A process-local `AssetService` keeping cash-in-out records in memory.
///
/// Uses `Arc<RwLock<Vec<CashInOut>>>` so clones share the same records and
/// listing preserves insertion order. Ids come from a shared sequence.
#[derive(Default, Clone)]
pub struct InMemoryAssetService {
    records: Arc<RwLock<Vec<CashInOut>>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryAssetService {
    /// Creates a new, empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds existing records, e.g. from a seed file.
    ///
    /// The id sequence is advanced past every numeric id loaded so newly
    /// registered withdrawals never collide with them.
    pub async fn load(&self, records: impl IntoIterator<Item = CashInOut>) {
        let mut stored = self.records.write().await;
        for record in records {
            if let Ok(id) = record.id.parse::<u64>() {
                self.sequence.fetch_max(id, Ordering::SeqCst);
            }
            stored.push(record);
        }
    }

    /// Every record held, in insertion order.
    pub async fn all(&self) -> Vec<CashInOut> {
        self.records.read().await.clone()
    }

    fn next_id(&self) -> String {
        (self.sequence.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }
}

#[async_trait]
impl AssetService for InMemoryAssetService {
    async fn find_unprocessed_cash_out(&self, actor: &Actor) -> Result<Vec<CashInOut>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|cio| {
                cio.withdrawal && cio.account_id == actor.id && cio.status_type.is_unprocessing()
            })
            .cloned()
            .collect())
    }

    async fn withdraw(&self, param: RegCashOut) -> Result<String> {
        if param.account_id == Actor::ANONYMOUS_ID {
            return Err(AssetError::business("error.Actor.anonymous"));
        }

        let now = Local::now().naive_local();
        let today = now.date();
        let value_day = today
            .checked_add_days(VALUE_DAY_OFFSET)
            .ok_or_else(|| AssetError::Internal(format!("value day overflows from {today}")))?;

        let id = self.next_id();
        let record = CashInOut {
            id: id.clone(),
            account_id: param.account_id.clone(),
            currency: param.currency.into(),
            abs_amount: param.abs_amount.into(),
            withdrawal: true,
            request_day: today,
            request_date: now,
            event_day: today,
            value_day,
            target_fi_code: None,
            target_fi_account_id: None,
            self_fi_code: None,
            self_fi_account_id: None,
            status_type: ActionStatusType::Unprocessed,
            update_actor: param.account_id,
            update_date: now,
            cashflow_id: None,
        };

        self.records.write().await.push(record);
        tracing::debug!(%id, "cash-out recorded");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constraints::{AbsAmount, Currency};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn param(account_id: &str) -> RegCashOut {
        RegCashOut::new(
            account_id,
            Currency::new("USD").unwrap(),
            AbsAmount::new(dec!(100.00)).unwrap(),
        )
    }

    fn seeded(id: &str, account_id: &str, withdrawal: bool, status: ActionStatusType) -> CashInOut {
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let date = day.and_hms_opt(0, 0, 0).unwrap();
        CashInOut {
            id: id.to_string(),
            account_id: account_id.to_string(),
            currency: "JPY".to_string(),
            abs_amount: dec!(10),
            withdrawal,
            request_day: day,
            request_date: date,
            event_day: day,
            value_day: day,
            target_fi_code: None,
            target_fi_account_id: None,
            self_fi_code: None,
            self_fi_account_id: None,
            status_type: status,
            update_actor: account_id.to_string(),
            update_date: date,
            cashflow_id: None,
        }
    }

    #[tokio::test]
    async fn test_withdraw_records_unprocessed_cash_out() {
        let service = InMemoryAssetService::new();
        let id = service.withdraw(param("acc-1")).await.unwrap();
        assert_eq!(id, "1");

        let all = service.all().await;
        assert_eq!(all.len(), 1);
        let cio = &all[0];
        assert_eq!(cio.account_id, "acc-1");
        assert_eq!(cio.currency, "USD");
        assert_eq!(cio.abs_amount, dec!(100.00));
        assert!(cio.withdrawal);
        assert_eq!(cio.status_type, ActionStatusType::Unprocessed);
        assert_eq!(cio.value_day, cio.event_day + VALUE_DAY_OFFSET);
        assert_eq!(cio.cashflow_id, None);
    }

    #[tokio::test]
    async fn test_withdraw_rejects_anonymous() {
        let service = InMemoryAssetService::new();
        let result = service.withdraw(param(Actor::ANONYMOUS_ID)).await;
        assert!(matches!(result, Err(AssetError::Business(_))));
        assert!(service.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_ids_continue_after_loaded_records() {
        let service = InMemoryAssetService::new();
        service
            .load(vec![
                seeded("7", "acc-1", true, ActionStatusType::Processed),
                seeded("legacy", "acc-1", true, ActionStatusType::Processed),
            ])
            .await;

        assert_eq!(service.withdraw(param("acc-1")).await.unwrap(), "8");
        assert_eq!(service.withdraw(param("acc-1")).await.unwrap(), "9");
    }

    #[tokio::test]
    async fn test_find_unprocessed_filters_by_actor_kind_and_status() {
        let service = InMemoryAssetService::new();
        service
            .load(vec![
                seeded("1", "acc-1", true, ActionStatusType::Unprocessed),
                seeded("2", "acc-2", true, ActionStatusType::Unprocessed),
                seeded("3", "acc-1", false, ActionStatusType::Unprocessed),
                seeded("4", "acc-1", true, ActionStatusType::Processed),
                seeded("5", "acc-1", true, ActionStatusType::Error),
                seeded("6", "acc-1", true, ActionStatusType::Cancelled),
            ])
            .await;

        let found = service
            .find_unprocessed_cash_out(&Actor::user("acc-1"))
            .await
            .unwrap();
        let ids: Vec<_> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let service = InMemoryAssetService::new();
        let clone = service.clone();
        clone.withdraw(param("acc-1")).await.unwrap();
        assert_eq!(service.all().await.len(), 1);
    }
}
