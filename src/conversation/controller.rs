//! Turn-by-turn dialogue controller
//!
//! A `Conversation` owns one customer's cart and utterance log. Each call to
//! `process_message` is one complete turn: the utterance is logged, dispatched
//! on the current state and answered with plain text. Nothing here fails; every
//! problem becomes part of the reply.

use super::messages::{self, render_menu, render_not_found, render_receipt};
use super::state::ConversationState;
use crate::cart::{Cart, CartError};
use crate::interpreter::{contains_any, interpret};
use crate::menu::Catalog;
use std::sync::Arc;

// =============================================================================
// Keyword Sets
// =============================================================================

/// Exact (trimmed, lowercased) inputs that end the session in any state
pub const QUIT_COMMANDS: &[&str] = &["quit", "q", "keluar", "exit"];

const MENU_KEYWORDS: &[&str] = &["menu", "daftar", "katalog", "pilihan"];
const CART_KEYWORDS: &[&str] = &["pesanan", "order", "keranjang", "list"];
const CONFIRM_KEYWORDS: &[&str] = &["konfirmasi", "confirm", "pesan", "bayar", "selesai"];
const CLEAR_KEYWORDS: &[&str] = &["hapus semua", "clear", "reset", "bersihkan"];

const AFFIRMATIVE_KEYWORDS: &[&str] = &["ya", "yes", "benar", "ok", "oke", "lanjut"];
const NEGATIVE_KEYWORDS: &[&str] = &["tidak", "no", "batal", "ubah"];

/// Words that disqualify an utterance from being read as a name
const NAME_FILLERS: &[&str] = &["ya", "yes", "ok", "oke"];

/// Name used when none can be read from the conversation
pub const DEFAULT_CUSTOMER_NAME: &str = "Pelanggan";

/// True for inputs that should end the session immediately
pub fn is_quit_command(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    QUIT_COMMANDS.contains(&input.as_str())
}

// =============================================================================
// Conversation
// =============================================================================

/// One customer's ordering session
#[derive(Debug, Clone)]
pub struct Conversation {
    catalog: Arc<Catalog>,
    cart: Cart,
    state: ConversationState,
    history: Vec<String>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::default()))
    }
}

impl Conversation {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            state: ConversationState::Greeting,
            history: Vec::new(),
        }
    }

    /// Opens the session and returns the welcome text
    pub fn start(&mut self) -> String {
        self.transition(ConversationState::TakingOrder);
        messages::WELCOME.to_string()
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every non-quit utterance processed so far, trimmed
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Removes a cart line on behalf of the customer
    pub fn remove_line(&mut self, index: usize) -> Result<String, CartError> {
        self.cart.remove(index)
    }

    /// Called by hosts after a turn that placed an order
    pub fn reset_after_completion(&mut self) {
        if self.state == ConversationState::OrderComplete {
            self.transition(ConversationState::TakingOrder);
        }
    }

    /// A staff member has answered; read the customer's next message as an order
    pub fn hand_off_to_human(&mut self) {
        self.transition(ConversationState::WaitingHuman);
    }

    /// Processes one utterance and returns the reply
    pub fn process_message(&mut self, text: &str) -> String {
        let input = text.trim();

        if is_quit_command(input) {
            return messages::FAREWELL.to_string();
        }

        self.history.push(input.to_string());

        match self.state {
            ConversationState::Greeting => {
                self.transition(ConversationState::TakingOrder);
                self.handle_taking_order(input)
            }
            ConversationState::TakingOrder => self.handle_taking_order(input),
            ConversationState::ConfirmingOrder => self.handle_confirmation(input),
            ConversationState::WaitingHuman => {
                self.transition(ConversationState::TakingOrder);
                format!(
                    "{} {}",
                    messages::HUMAN_THANKS,
                    self.process_order_request(input)
                )
            }
            ConversationState::OrderComplete => messages::START_AGAIN.to_string(),
        }
    }

    // =========================================================================
    // State Handlers
    // =========================================================================

    fn handle_taking_order(&mut self, input: &str) -> String {
        let lower = input.to_lowercase();

        if contains_any(&lower, MENU_KEYWORDS) {
            return render_menu(&self.catalog);
        }

        if contains_any(&lower, CART_KEYWORDS) {
            return self.cart.summary();
        }

        if contains_any(&lower, CONFIRM_KEYWORDS) {
            return self.start_confirmation();
        }

        if contains_any(&lower, CLEAR_KEYWORDS) {
            self.cart.clear();
            return messages::CART_CLEARED.to_string();
        }

        self.process_order_request(input)
    }

    fn handle_confirmation(&mut self, input: &str) -> String {
        let lower = input.to_lowercase();

        if contains_any(&lower, AFFIRMATIVE_KEYWORDS) {
            self.finalize_order()
        } else if contains_any(&lower, NEGATIVE_KEYWORDS) {
            self.transition(ConversationState::TakingOrder);
            messages::EDIT_ORDER.to_string()
        } else {
            messages::CONFIRM_REPROMPT.to_string()
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn process_order_request(&mut self, input: &str) -> String {
        let catalog = Arc::clone(&self.catalog);
        let interpretation = interpret(&catalog, input);

        if interpretation.is_empty() {
            return render_not_found(&interpretation.suggestions);
        }

        let added = interpretation
            .items
            .into_iter()
            .map(|requested| {
                self.cart
                    .add(requested.item, requested.quantity, requested.modifiers, "")
            })
            .collect::<Vec<_>>();

        format!(
            "{}\n\n{}\n\n{}",
            added.join("\n"),
            self.cart.summary(),
            messages::FOLLOW_UP
        )
    }

    fn start_confirmation(&mut self) -> String {
        match self.cart.confirm() {
            Ok(confirmation) => {
                self.transition(ConversationState::ConfirmingOrder);
                format!("{}\n\n{}", confirmation.summary, messages::CONFIRM_PROMPT)
            }
            Err(err) => err.to_string(),
        }
    }

    fn finalize_order(&mut self) -> String {
        let customer_name = self
            .history
            .last()
            .and_then(|last| name_from_utterance(last))
            .unwrap_or_else(|| DEFAULT_CUSTOMER_NAME.to_string());

        match self.cart.place(&customer_name) {
            Ok(placement) => {
                self.transition(ConversationState::OrderComplete);
                render_receipt(&placement)
            }
            Err(err) => {
                tracing::warn!(error = %err, "order could not be placed");
                format!("❌ Gagal memproses pesanan: {}", err)
            }
        }
    }

    fn transition(&mut self, next: ConversationState) {
        if self.state != next {
            tracing::info!(from = %self.state, to = %next, "conversation state changed");
            self.state = next;
        }
    }
}

/// Reads "<filler> <first> <last>" style answers: the 2nd and 3rd words become
/// the name unless any word is a bare affirmative.
fn name_from_utterance(utterance: &str) -> Option<String> {
    let words: Vec<&str> = utterance.split_whitespace().collect();
    if words.len() < 2 {
        return None;
    }

    let has_filler = words
        .iter()
        .any(|word| NAME_FILLERS.contains(&word.to_lowercase().as_str()));
    if has_filler {
        return None;
    }

    Some(words[1..words.len().min(3)].join(" "))
}
