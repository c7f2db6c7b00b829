//! Session State Management
//!
//! Every session owns a separate `Conversation`: its own cart, order counter
//! and utterance log. Only the immutable catalog is shared.

use super::helpers::new_session_id;
use crate::conversation::Conversation;
use crate::menu::Catalog;
use dashmap::DashMap;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the catalog and live sessions
pub struct AppState {
    /// In-memory conversations, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, Conversation>,

    /// Menu served to every session
    pub catalog: Arc<Catalog>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with the standing menu and no sessions
    pub fn new() -> Self {
        Self::with_catalog(Catalog::default())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            sessions: DashMap::new(),
            catalog: Arc::new(catalog),
        }
    }

    /// Starts a conversation under a fresh id; returns the id and the welcome text
    pub fn open_session(&self) -> (String, String) {
        let session_id = new_session_id();
        let mut conversation = Conversation::new(Arc::clone(&self.catalog));
        let welcome = conversation.start();

        self.sessions.insert(session_id.clone(), conversation);
        tracing::info!(session = %session_id, active = self.sessions.len(), "session opened");

        (session_id, welcome)
    }

    /// Drops a session, e.g. after the customer said goodbye
    pub fn close_session(&self, session_id: &str) -> bool {
        let closed = self.sessions.remove(session_id).is_some();
        if closed {
            tracing::info!(session = %session_id, "session closed");
        }
        closed
    }
}
