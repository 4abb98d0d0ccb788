//! Audit trail entries for issued refusals.

use super::category::RefusalCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Record of a single refusal. Only a fingerprint of the query is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefusalAuditEntry {
    pub entry_id: Uuid,
    pub category: RefusalCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_fingerprint: Option<String>,
    pub suggestion_count: usize,
    pub issued_at: DateTime<Utc>,
}

impl RefusalAuditEntry {
    pub fn new(category: RefusalCategory, query: Option<&str>, suggestion_count: usize) -> Self {
        Self {
            entry_id: Uuid::new_v4(),
            category,
            query_fingerprint: query
                .filter(|q| !q.is_empty())
                .map(|q| compute_hash(q.as_bytes())),
            suggestion_count,
            issued_at: Utc::now(),
        }
    }

    /// Serializes the entry into a JSON line (no trailing newline).
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}

/// Lowercase hex SHA-256 of the provided bytes.
pub fn compute_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}
