//! Core types for stockroom

use serde::{Deserialize, Serialize};

/// Item ID type
pub type ItemId = i64;

/// A single catalog record.
///
/// Optional fields are omitted from JSON output when absent so responses
/// mirror the source document key-for-key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}
