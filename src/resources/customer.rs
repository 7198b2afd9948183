//! Customer resource (compact expansion target).

use serde::{Deserialize, Serialize};

use crate::object::Object;
use crate::params::{Currency, Metadata};
use crate::resources::address::Address;
use crate::resources::shipping::CustomerShippingDetails;

/// Tax exemption status of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTaxExempt {
    /// Taxes apply normally.
    None,
    /// Customer is exempt from tax.
    Exempt,
    /// Reverse-charge mechanism applies.
    Reverse,
}

/// A customer of the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// Unique identifier.
    pub id: String,
    /// Always `"customer"`.
    pub object: String,
    /// Billing address.
    pub address: Option<Address>,
    /// Current balance in the customer's currency, in minor units.
    pub balance: i64,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Currency of recurring billing, once known.
    pub currency: Currency,
    /// Whether the customer has been deleted.
    pub deleted: bool,
    /// Arbitrary description.
    pub description: String,
    /// Email address.
    pub email: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Full name or business name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Mailing/shipping information.
    pub shipping: Option<CustomerShippingDetails>,
    /// Tax exemption status.
    pub tax_exempt: Option<CustomerTaxExempt>,
}

impl Object for Customer {
    const OBJECT: &'static str = "customer";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::Expandable;

    #[test]
    fn test_customer_reference_decodes_both_forms() {
        let bare: Expandable<Customer> = serde_json::from_str(r#""cus_1""#).unwrap();
        assert_eq!(bare.id(), "cus_1");

        let full: Expandable<Customer> =
            serde_json::from_str(r#"{"id": "cus_1", "email": "jane@example.com"}"#).unwrap();
        assert_eq!(full.as_object().unwrap().email, "jane@example.com");
    }

    #[test]
    fn test_tax_exempt_wire_tags() {
        let exempt: CustomerTaxExempt = serde_json::from_str(r#""reverse""#).unwrap();
        assert_eq!(exempt, CustomerTaxExempt::Reverse);
    }
}
