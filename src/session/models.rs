//! Session Request and Response Models

use crate::cart::OrderLine;
use crate::conversation::ConversationState;
use crate::menu::{MenuItem, Rupiah};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input for one chat turn
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatInput {
    /// What the customer typed
    pub message: String,

    /// Optional session identifier; the cookie is used when absent
    pub session_id: Option<String>,
}

/// Reply to a chat turn or to opening a session
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub session_id: String,

    /// Text to show the customer
    pub reply: String,

    /// State the turn ended in, before any host reset
    pub state: ConversationState,
}

/// Current cart of a session
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub session_id: String,
    pub lines: Vec<OrderLine>,
    pub total: Rupiah,

    /// Same text the assistant shows for "pesanan"
    pub summary: String,
}

/// Result of removing a cart line
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveResponse {
    pub session_id: String,
    pub message: String,
    pub total: Rupiah,
}

/// Hand-off acknowledgement
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffResponse {
    pub session_id: String,
    pub state: ConversationState,
}

/// The menu with the customizations it supports
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub items: Vec<MenuItem>,

    /// Modifier family name to its tags
    pub modifiers: BTreeMap<&'static str, &'static [&'static str]>,
}
