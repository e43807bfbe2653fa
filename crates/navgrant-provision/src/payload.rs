//! Grant batch construction.

use serde::{Deserialize, Serialize};

use navgrant_core::CatalogEntry;

use crate::error::{ProvisionError, Result};

/// One access-grant record, the unit submitted to the external authority.
///
/// `user_ids` is the caller's raw token (the authority interprets it) and
/// `status` is the caller's label; within one batch every record carries the
/// same values for both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRequest {
    /// Page label.
    pub page: String,

    /// Normalized page url (no leading path separator).
    pub url: String,

    /// Target user identifiers, verbatim from the caller.
    #[serde(rename = "userIds")]
    pub user_ids: String,

    /// Grant status label, verbatim from the caller.
    pub status: String,
}

/// Build the outbound batch for the resolved pages.
///
/// Emits one record per page in input order, normalizing each url and
/// copying `user_ids` and `status` into every record. An empty page list is
/// rejected before any submission can be attempted.
pub fn build_payload(
    pages: &[CatalogEntry],
    user_ids: &str,
    status: &str,
) -> Result<Vec<GrantRequest>> {
    if pages.is_empty() {
        return Err(ProvisionError::EmptySelection);
    }

    Ok(pages
        .iter()
        .map(|page| GrantRequest {
            page: page.title.clone(),
            url: page.normalized_url().to_string(),
            user_ids: user_ids.to_string(),
            status: status.to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_fan_out() {
        let pages = [CatalogEntry::new("A", "/a"), CatalogEntry::new("C", "/c")];
        let batch = build_payload(&pages, "1,2", "Active").unwrap();

        assert_eq!(
            batch,
            vec![
                GrantRequest {
                    page: "A".to_string(),
                    url: "a".to_string(),
                    user_ids: "1,2".to_string(),
                    status: "Active".to_string(),
                },
                GrantRequest {
                    page: "C".to_string(),
                    url: "c".to_string(),
                    user_ids: "1,2".to_string(),
                    status: "Active".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_selection_rejected() {
        let err = build_payload(&[], "1,2", "Active").unwrap_err();
        assert!(matches!(err, ProvisionError::EmptySelection));
    }

    #[test]
    fn test_wire_shape_uses_camel_case_user_ids() {
        let batch = build_payload(&[CatalogEntry::new("A", "/a")], "7", "Active").unwrap();
        let json = serde_json::to_value(&batch[0]).unwrap();

        assert_eq!(json["page"], "A");
        assert_eq!(json["url"], "a");
        assert_eq!(json["userIds"], "7");
        assert_eq!(json["status"], "Active");
    }
}
