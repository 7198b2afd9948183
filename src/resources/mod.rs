//! Typed API resources and their request parameters.

pub mod account;
pub mod address;
pub mod balance;
pub mod bank_account;
pub mod card;
pub mod charge;
pub mod checkout_session;
pub mod customer;
pub mod file;
pub mod invoice;
pub mod issuing;
pub mod payment_intent;
pub mod payment_method;
pub mod payment_source;
pub mod person;
pub mod plan;
pub mod product;
pub mod reporting;
pub mod shipping;
pub mod sku;
pub mod source;
pub mod subscription;
pub mod taxrate;
pub mod terminal;
pub mod topup;
pub mod usage_record;
