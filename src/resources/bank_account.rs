//! Bank account resource.

use serde::{Deserialize, Serialize};

use crate::object::Object;
use crate::params::{Currency, Metadata};

/// Status of a bank account attached to an account or customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankAccountStatus {
    /// Micro-deposit or instant verification not yet performed.
    New,
    /// Verified via micro-deposits or instant verification.
    Validated,
    /// Confirmed working by a transfer.
    Verified,
    /// Verification attempt failed.
    VerificationFailed,
    /// A transfer to this account failed.
    Errored,
}

/// A bank account attached to an account or customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    /// Unique identifier.
    pub id: String,
    /// Always `"bank_account"`.
    pub object: String,
    /// Name of the account holder.
    pub account_holder_name: String,
    /// Holder type: `individual` or `company`.
    pub account_holder_type: String,
    /// Name of the bank.
    pub bank_name: String,
    /// Two-letter country code of the bank account.
    pub country: String,
    /// Currency paid out to this bank account.
    pub currency: Currency,
    /// Fingerprint uniquely identifying this account number.
    pub fingerprint: String,
    /// Last four digits of the account number.
    pub last4: String,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Routing transit number.
    pub routing_number: String,
    /// Verification status.
    pub status: Option<BankAccountStatus>,
}

impl Object for BankAccount {
    const OBJECT: &'static str = "bank_account";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Bank account parameters for source attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccountParams {
    /// Name of the account holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    /// Holder type: `individual` or `company`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_type: Option<String>,
    /// Account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Currency of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Routing transit number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_account_decode() {
        let json = r#"{
            "id": "ba_1",
            "object": "bank_account",
            "bank_name": "PAYRAIL TEST BANK",
            "country": "US",
            "currency": "usd",
            "last4": "6789",
            "routing_number": "110000000",
            "status": "new"
        }"#;
        let account: BankAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.last4, "6789");
        assert_eq!(account.status, Some(BankAccountStatus::New));
    }

    #[test]
    fn test_status_wire_tags() {
        let status: BankAccountStatus = serde_json::from_str(r#""verification_failed""#).unwrap();
        assert_eq!(status, BankAccountStatus::VerificationFailed);
    }
}
