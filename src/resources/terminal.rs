//! Terminal connection token and reader resources.

use serde::{Deserialize, Serialize};

use crate::form::FormParams;
use crate::list::ListParams;
use crate::object::Object;
use crate::params::{Metadata, Params};

/// A short-lived credential used by a terminal SDK to connect to readers.
///
/// Connection tokens carry no identifier and are never an expansion target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConnectionToken {
    /// Always `"terminal.connection_token"`.
    pub object: String,
    /// Location the token is scoped to.
    pub location: String,
    /// The token itself.
    pub secret: String,
}

/// Parameters for creating a connection token.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TerminalConnectionTokenParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Location to scope the token to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl FormParams for TerminalConnectionTokenParams {}

/// A physical card reader registered to the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalReader {
    /// Unique identifier.
    pub id: String,
    /// Always `"terminal.reader"`.
    pub object: String,
    /// Whether the reader has been deleted.
    pub deleted: bool,
    /// Software version running on the reader.
    pub device_sw_version: String,
    /// Hardware model of the reader.
    pub device_type: String,
    /// Local IP address of the reader.
    pub ip_address: String,
    /// Display label.
    pub label: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Location the reader is assigned to.
    pub location: String,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Serial number of the reader.
    pub serial_number: String,
    /// Network status, `online` or `offline`.
    pub status: String,
}

impl Object for TerminalReader {
    const OBJECT: &'static str = "terminal.reader";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters for registering or updating a reader.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TerminalReaderParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Location to assign the reader to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Code shown on the reader during registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_code: Option<String>,
}

impl FormParams for TerminalReaderParams {}

/// Parameters for retrieving a reader.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TerminalReaderGetParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
}

impl FormParams for TerminalReaderGetParams {}

/// Parameters for listing readers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TerminalReaderListParams {
    /// Common pagination cursors and limits.
    #[serde(flatten)]
    pub list_params: ListParams,
    /// Filter by hardware model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    /// Filter by location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Filter by network status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl FormParams for TerminalReaderListParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::to_form;

    #[test]
    fn test_connection_token_decode() {
        let json = r#"{
            "object": "terminal.connection_token",
            "secret": "pst_test_abc123"
        }"#;
        let token: TerminalConnectionToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.secret, "pst_test_abc123");
        assert!(token.location.is_empty());
    }

    #[test]
    fn test_reader_decode() {
        let json = r#"{
            "id": "tmr_1",
            "object": "terminal.reader",
            "device_type": "verifone_P400",
            "label": "Front desk",
            "status": "online"
        }"#;
        let reader: TerminalReader = serde_json::from_str(json).unwrap();
        assert_eq!(reader.id, "tmr_1");
        assert_eq!(reader.device_type, "verifone_P400");
        assert!(!reader.deleted);
    }

    #[test]
    fn test_reader_params_encode() {
        let params = TerminalReaderParams {
            label: Some("Front desk".to_owned()),
            registration_code: Some("puppies-plug-could".to_owned()),
            ..TerminalReaderParams::default()
        };
        let encoded = to_form(&params).unwrap();
        assert_eq!(
            encoded,
            "label=Front+desk&registration_code=puppies-plug-could"
        );
    }
}
