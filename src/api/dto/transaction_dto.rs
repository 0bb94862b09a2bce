//! Transaction ingestion DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::validation::FieldValidator;
use crate::domain::Transaction;
use crate::error::OffersError;

/// One transaction as submitted to `POST /transactions`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TransactionDto {
    /// Caller-assigned id used for deduplication.
    #[serde(default)]
    pub id: Option<String>,
    /// Purchasing user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Merchant where the purchase happened.
    #[serde(default)]
    pub merchant_id: Option<String>,
    /// 4-digit merchant category code.
    #[serde(default)]
    pub mcc: Option<String>,
    /// Amount in minor units (positive).
    #[serde(default)]
    pub amount_cents: Option<i64>,
    /// Approval instant (RFC 3339).
    #[serde(default)]
    pub approved_at: Option<String>,
}

impl TransactionDto {
    fn check(self, index: usize, v: &mut FieldValidator) -> Option<Transaction> {
        let key = |field: &str| format!("transactions[{index}].{field}");

        let id = v.required(&key("id"), self.id);
        let user_id = v.required(&key("user_id"), self.user_id);
        let merchant_id = v.required(&key("merchant_id"), self.merchant_id);
        let mcc = v.mcc(&key("mcc"), self.mcc);
        let amount_cents = v.positive_u64(&key("amount_cents"), self.amount_cents);
        let approved_at = v.timestamp(&key("approved_at"), self.approved_at);

        Some(Transaction {
            id: id?,
            user_id: user_id?,
            merchant_id: merchant_id?,
            mcc: mcc?,
            amount_cents: amount_cents?,
            approved_at: approved_at?,
        })
    }
}

/// Request body for `POST /transactions`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct IngestTransactionsRequest {
    /// Non-empty batch of transactions.
    #[serde(default)]
    pub transactions: Vec<TransactionDto>,
}

impl IngestTransactionsRequest {
    /// Validates the whole batch before anything is stored.
    ///
    /// # Errors
    ///
    /// Returns [`OffersError::Validation`] if the batch is empty or any
    /// entry is malformed; no entry of a rejected batch is returned.
    pub fn validate(self) -> Result<Vec<Transaction>, OffersError> {
        let mut v = FieldValidator::new();
        if self.transactions.is_empty() {
            v.reject("transactions", "transactions is required");
        }

        let batch: Vec<Transaction> = self
            .transactions
            .into_iter()
            .enumerate()
            .filter_map(|(i, dto)| dto.check(i, &mut v))
            .collect();

        v.finish()?;
        Ok(batch)
    }
}

/// Response body for `POST /transactions` (201 Created).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IngestTransactionsResponse {
    /// Transactions newly stored; ids already present are not counted.
    pub inserted: usize,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn valid_dto(id: &str) -> TransactionDto {
        TransactionDto {
            id: Some(id.to_string()),
            user_id: Some("user-1".to_string()),
            merchant_id: Some("merchant-1".to_string()),
            mcc: Some("5812".to_string()),
            amount_cents: Some(1_250),
            approved_at: Some("2025-10-20T18:30:00Z".to_string()),
        }
    }

    #[test]
    fn valid_batch_converts() {
        let req = IngestTransactionsRequest {
            transactions: vec![valid_dto("t1"), valid_dto("t2")],
        };
        let Ok(batch) = req.validate() else {
            panic!("valid batch rejected");
        };
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.first().map(|t| t.amount_cents), Some(1_250));
    }

    #[test]
    fn empty_batch_is_rejected() {
        let Err(OffersError::Validation(fields)) = IngestTransactionsRequest::default().validate()
        else {
            panic!("expected validation failure");
        };
        assert_eq!(
            fields.get("transactions").map(String::as_str),
            Some("transactions is required")
        );
    }

    #[test]
    fn one_bad_entry_fails_whole_batch() {
        let mut bad = valid_dto("t2");
        bad.mcc = Some("58A2".to_string());
        bad.amount_cents = Some(-5);
        let req = IngestTransactionsRequest {
            transactions: vec![valid_dto("t1"), bad, valid_dto("t3")],
        };
        let Err(OffersError::Validation(fields)) = req.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(
            fields.get("transactions[1].mcc").map(String::as_str),
            Some("mcc must contain only numeric characters")
        );
        assert_eq!(
            fields.get("transactions[1].amount_cents").map(String::as_str),
            Some("amount_cents must be greater than 0")
        );
    }

    #[test]
    fn missing_fields_are_named() {
        let req = IngestTransactionsRequest {
            transactions: vec![TransactionDto::default()],
        };
        let Err(OffersError::Validation(fields)) = req.validate() else {
            panic!("expected validation failure");
        };
        for field in ["id", "user_id", "merchant_id", "mcc", "amount_cents", "approved_at"] {
            assert_eq!(
                fields.get(&format!("transactions[0].{field}")),
                Some(&format!("{field} is required"))
            );
        }
    }
}
