//! Conversation states

use serde::Serialize;
use std::fmt;

/// Where the dialogue currently stands
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Nothing processed yet
    #[default]
    Greeting,
    /// Accepting items and commands
    TakingOrder,
    /// Summary shown, waiting for ya/tidak
    ConfirmingOrder,
    /// Staff answered the customer; the next message is read as an order
    WaitingHuman,
    /// An order was just placed; hosts move back to `TakingOrder`
    OrderComplete,
}

impl ConversationState {
    pub fn as_str(self) -> &'static str {
        match self {
            ConversationState::Greeting => "greeting",
            ConversationState::TakingOrder => "taking_order",
            ConversationState::ConfirmingOrder => "confirming_order",
            ConversationState::WaitingHuman => "waiting_human",
            ConversationState::OrderComplete => "order_complete",
        }
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
