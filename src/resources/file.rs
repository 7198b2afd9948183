//! File resource (verification documents, report results).

use serde::{Deserialize, Serialize};

use crate::object::Object;

/// A file uploaded to or produced by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    /// Unique identifier.
    pub id: String,
    /// Always `"file"`.
    pub object: String,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Filename as uploaded.
    pub filename: String,
    /// Purpose the file was uploaded for.
    pub purpose: String,
    /// Size in bytes.
    pub size: i64,
    /// User-friendly title.
    pub title: String,
    /// File format (e.g. `pdf`, `jpg`).
    #[serde(rename = "type")]
    pub file_type: String,
    /// URL the file contents can be fetched from.
    pub url: String,
}

impl Object for File {
    const OBJECT: &'static str = "file";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::Expandable;

    #[test]
    fn test_file_reference_expands() {
        let bare: Expandable<File> = serde_json::from_str(r#""file_1""#).unwrap();
        assert_eq!(bare.id(), "file_1");

        let full: Expandable<File> =
            serde_json::from_str(r#"{"id": "file_1", "type": "pdf", "size": 2048}"#).unwrap();
        let file = full.as_object().unwrap();
        assert_eq!(file.file_type, "pdf");
        assert_eq!(file.size, 2048);
    }
}
