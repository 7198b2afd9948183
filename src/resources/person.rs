//! Person resource and parameters.

use serde::{Deserialize, Serialize};

use crate::form::FormParams;
use crate::list::ListParams;
use crate::object::Object;
use crate::params::{Metadata, Params};
use crate::resources::account::{AccountAddress, AccountAddressParams};
use crate::resources::file::File;

/// Machine-readable verification state of a person's document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationDocumentDetailsCode {
    /// The uploaded file was corrupt.
    DocumentCorrupt,
    /// The document appears to be a copy.
    DocumentFailedCopy,
    /// The document was greyscale.
    DocumentFailedGreyscale,
    /// The document failed for another reason.
    DocumentFailedOther,
    /// A test-mode document was uploaded in live mode.
    DocumentFailedTestMode,
    /// The document appears fraudulent.
    DocumentFraudulent,
    /// The document's ID type is not supported.
    DocumentIdTypeNotSupported,
    /// The document's issuing country is not supported.
    DocumentIdCountryNotSupported,
    /// The document appears manipulated.
    DocumentManipulated,
    /// The back of the document is missing.
    DocumentMissingBack,
    /// The front of the document is missing.
    DocumentMissingFront,
    /// The document is not readable.
    DocumentNotReadable,
    /// No document was uploaded.
    DocumentNotUploaded,
    /// The uploaded file was too large.
    DocumentTooLarge,
}

/// Machine-readable verification state of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonVerificationDetailsCode {
    /// The keyed-in identity could not be verified.
    FailedKeyedIdentity,
    /// Verification failed for another reason.
    FailedOther,
    /// The scanned name did not match the keyed-in one.
    ScanNameMismatch,
}

/// Status of an identity verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityVerificationStatus {
    /// Verification is in progress.
    Pending,
    /// The identity is unverified.
    Unverified,
    /// The identity is verified.
    Verified,
}

/// A person's date of birth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dob {
    /// Day of the month.
    pub day: i64,
    /// Month of the year.
    pub month: i64,
    /// Four-digit year.
    pub year: i64,
}

/// How a person relates to the business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    /// Whether the person is a director.
    pub director: bool,
    /// Whether the person is an executive.
    pub executive: bool,
    /// Whether the person is an owner.
    pub owner: bool,
    /// Percent of the business the person owns.
    pub percent_ownership: f64,
    /// Whether the person represents the business.
    pub representative: bool,
    /// The person's job title.
    pub title: String,
}

/// What is still missing to verify a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    /// Fields that need to be collected now.
    pub currently_due: Vec<String>,
    /// Fields that will eventually need to be collected.
    pub eventually_due: Vec<String>,
    /// Fields whose deadline has passed.
    pub past_due: Vec<String>,
    /// Fields currently being verified.
    pub pending_verification: Vec<String>,
}

/// A document verifying a person's identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonVerificationDocument {
    /// Back of the document.
    pub back: Option<File>,
    /// Human-readable details on the verification state.
    pub details: String,
    /// Machine-readable verification code.
    pub details_code: Option<VerificationDocumentDetailsCode>,
    /// Front of the document.
    pub front: Option<File>,
}

/// A person's verification state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonVerification {
    /// A second identity document.
    pub additional_document: Option<PersonVerificationDocument>,
    /// Human-readable details on the verification state.
    pub details: String,
    /// Machine-readable verification code.
    pub details_code: Option<PersonVerificationDetailsCode>,
    /// Primary identity document.
    pub document: Option<PersonVerificationDocument>,
    /// Verification status.
    pub status: Option<IdentityVerificationStatus>,
}

/// A person associated with an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    /// Unique identifier.
    pub id: String,
    /// Always `"person"`.
    pub object: String,
    /// Identifier of the account the person belongs to.
    pub account: String,
    /// Residential address.
    pub address: Option<AccountAddress>,
    /// Kana variant of the address (Japan only).
    pub address_kana: Option<AccountAddress>,
    /// Kanji variant of the address (Japan only).
    pub address_kanji: Option<AccountAddress>,
    /// Whether the person has been deleted.
    pub deleted: bool,
    /// Date of birth.
    pub dob: Option<Dob>,
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Kana variant of the first name (Japan only).
    pub first_name_kana: String,
    /// Kanji variant of the first name (Japan only).
    pub first_name_kanji: String,
    /// Gender, as on government documents.
    pub gender: String,
    /// Whether a government ID number is on file.
    pub id_number_provided: bool,
    /// Last name.
    pub last_name: String,
    /// Kana variant of the last name (Japan only).
    pub last_name_kana: String,
    /// Kanji variant of the last name (Japan only).
    pub last_name_kanji: String,
    /// Maiden name.
    pub maiden_name: String,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Phone number.
    pub phone: String,
    /// How the person relates to the business.
    pub relationship: Option<Relationship>,
    /// What is still missing to verify the person.
    pub requirements: Option<Requirements>,
    /// Whether the last four SSN digits are on file.
    pub ssn_last_4_provided: bool,
    /// Verification state.
    pub verification: Option<PersonVerification>,
}

impl Object for Person {
    const OBJECT: &'static str = "person";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Date-of-birth parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DobParams {
    /// Day of the month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    /// Month of the year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i64>,
    /// Four-digit year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

/// Relationship parameters between an account and a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RelationshipParams {
    /// Whether the person is a director.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<bool>,
    /// Whether the person is an executive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive: Option<bool>,
    /// Whether the person is an owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<bool>,
    /// Percent of the business the person owns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_ownership: Option<f64>,
    /// Whether the person represents the business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative: Option<bool>,
    /// The person's job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Identity-document parameters for a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonVerificationDocumentParams {
    /// File identifier for the back of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    /// File identifier for the front of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
}

/// Verification parameters for a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonVerificationParams {
    /// A second identity document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_document: Option<PersonVerificationDocumentParams>,
    /// Primary identity document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<PersonVerificationDocumentParams>,
}

/// Parameters for creating or updating a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Account the person belongs to; part of the URL, not the body.
    #[serde(skip)]
    pub account: Option<String>,
    /// Residential address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AccountAddressParams>,
    /// Kana variant of the address (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_kana: Option<AccountAddressParams>,
    /// Kanji variant of the address (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_kanji: Option<AccountAddressParams>,
    /// Date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<DobParams>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Kana variant of the first name (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name_kana: Option<String>,
    /// Kanji variant of the first name (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name_kanji: Option<String>,
    /// Gender, as on government documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Government ID number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Kana variant of the last name (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_kana: Option<String>,
    /// Kanji variant of the last name (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_kanji: Option<String>,
    /// Maiden name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maiden_name: Option<String>,
    /// Token standing in for the whole person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_token: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// How the person relates to the business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationshipParams>,
    /// Last four digits of the SSN.
    #[serde(rename = "ssn_last_4", skip_serializing_if = "Option::is_none")]
    pub ssn_last_4: Option<String>,
    /// Identity documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<PersonVerificationParams>,
}

impl FormParams for PersonParams {}

/// Relationship filters when listing persons.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RelationshipListParams {
    /// Only directors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<bool>,
    /// Only executives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive: Option<bool>,
    /// Only owners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<bool>,
    /// Only representatives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative: Option<bool>,
}

/// Parameters for listing the persons on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonListParams {
    /// Common pagination cursors and limits.
    #[serde(flatten)]
    pub list_params: ListParams,
    /// Account the persons belong to; part of the URL, not the body.
    #[serde(skip)]
    pub account: Option<String>,
    /// Relationship filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationshipListParams>,
}

impl FormParams for PersonListParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::to_form;

    #[test]
    fn test_person_decode() {
        let json = r#"{
            "id": "person_1",
            "object": "person",
            "first_name": "Jenny",
            "last_name": "Rosen",
            "dob": {"day": 1, "month": 2, "year": 1990},
            "relationship": {"representative": true, "percent_ownership": 50.0},
            "verification": {"status": "pending"}
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.first_name, "Jenny");
        assert_eq!(person.dob.unwrap().year, 1990);
        assert!(person.relationship.unwrap().representative);
        assert_eq!(
            person.verification.unwrap().status,
            Some(IdentityVerificationStatus::Pending)
        );
    }

    #[test]
    fn test_person_params_nest_relationship() {
        let params = PersonParams {
            first_name: Some("Jenny".to_owned()),
            relationship: Some(RelationshipParams {
                representative: Some(true),
                title: Some("CEO".to_owned()),
                ..RelationshipParams::default()
            }),
            ..PersonParams::default()
        };
        let encoded = to_form(&params).unwrap();
        assert_eq!(
            encoded,
            "first_name=Jenny&relationship%5Brepresentative%5D=true&relationship%5Btitle%5D=CEO"
        );
    }

    #[test]
    fn test_person_list_params_account_stays_out_of_body() {
        let params = PersonListParams {
            account: Some("acct_1".to_owned()),
            relationship: Some(RelationshipListParams {
                owner: Some(true),
                ..RelationshipListParams::default()
            }),
            ..PersonListParams::default()
        };
        let encoded = to_form(&params).unwrap();
        assert_eq!(encoded, "relationship%5Bowner%5D=true");
    }
}
