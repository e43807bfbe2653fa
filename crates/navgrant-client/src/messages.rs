//! Wire shapes exchanged with the grant authority.

use serde::{Deserialize, Serialize};

use navgrant_provision::GrantRequest;

/// The batch submitted to the authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// Grant records, in selection order.
    pub grants: Vec<GrantRequest>,
}

impl SubmissionRequest {
    /// Wrap a batch of grant records.
    pub fn new(grants: Vec<GrantRequest>) -> Self {
        Self { grants }
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Whether the batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

/// The authority's acknowledgement of a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    /// Optional human-readable confirmation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmissionAck {
    /// An acknowledgement carrying a confirmation message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navgrant_provision::build_payload;
    use navgrant_core::CatalogEntry;

    #[test]
    fn test_request_serializes_as_grants_array() {
        let batch = build_payload(&[CatalogEntry::new("A", "/a")], "7", "Active").unwrap();
        let request = SubmissionRequest::new(batch);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["grants"][0]["page"], "A");
        assert_eq!(json["grants"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_ack_roundtrip() {
        let ack = SubmissionAck::with_message("created");
        let json = serde_json::to_string(&ack).unwrap();
        let recovered: SubmissionAck = serde_json::from_str(&json).unwrap();
        assert_eq!(ack, recovered);
    }

    #[test]
    fn test_ack_without_message() {
        let recovered: SubmissionAck = serde_json::from_str("{}").unwrap();
        assert_eq!(recovered, SubmissionAck::default());
    }
}
