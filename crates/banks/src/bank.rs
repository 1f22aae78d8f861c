use serde::{Deserialize, Serialize};

use bankapi_core::Entity;

/// An account's financial profile, keyed by its client-assigned account number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    /// Unique, immutable once stored.
    pub account_number: String,
    /// Trust score. No range is enforced.
    pub trust: f64,
    #[serde(rename = "default_transaction_fee")]
    pub transaction_fee: i64,
}

impl Bank {
    pub fn new(account_number: impl Into<String>, trust: f64, transaction_fee: i64) -> Self {
        Self {
            account_number: account_number.into(),
            trust,
            transaction_fee,
        }
    }
}

impl Entity for Bank {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.account_number
    }
}
