// ABOUTME: Todo item type definitions
// ABOUTME: All fields are optional so partial update bodies are distinguishable from zero values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item as it crosses the transport and domain boundaries.
///
/// Every field is an `Option` because the same shape is used for create and
/// partial-update requests; an absent field means "leave it alone", not
/// "set it to the default". Unknown fields in request bodies are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
