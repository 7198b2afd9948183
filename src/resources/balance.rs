//! Balance transaction resource (compact expansion target).

use serde::{Deserialize, Serialize};

use crate::object::Object;
use crate::params::Currency;

/// A movement of funds in the account balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceTransaction {
    /// Unique identifier.
    pub id: String,
    /// Always `"balance_transaction"`.
    pub object: String,
    /// Gross amount of the transaction, in minor units.
    pub amount: i64,
    /// Time the funds become available (unix timestamp).
    pub available_on: i64,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Arbitrary description.
    pub description: String,
    /// Fees deducted, in minor units.
    pub fee: i64,
    /// Net amount after fees, in minor units.
    pub net: i64,
    /// Status: `available` or `pending`.
    pub status: String,
    /// Transaction type (e.g. `charge`, `refund`, `topup`).
    #[serde(rename = "type")]
    pub transaction_type: String,
}

impl Object for BalanceTransaction {
    const OBJECT: &'static str = "balance_transaction";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::Expandable;

    #[test]
    fn test_balance_transaction_reference() {
        let bare: Expandable<BalanceTransaction> = serde_json::from_str(r#""txn_1""#).unwrap();
        assert_eq!(bare.id(), "txn_1");

        let full: Expandable<BalanceTransaction> =
            serde_json::from_str(r#"{"id": "txn_1", "amount": 900, "net": 841, "fee": 59}"#).unwrap();
        let txn = full.as_object().unwrap();
        assert_eq!(txn.net, 841);
    }
}
