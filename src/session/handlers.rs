//! REST API handlers for ordering sessions
//!
//! This module implements HTTP endpoints for chatting with the assistant,
//! inspecting and editing a session's cart, and staff hand-off.

use super::{helpers::*, models::*, state::SharedState};
use crate::conversation::{is_quit_command, ConversationState};
use crate::error::{ApiError, Result};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};

/// Creates routes for session-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/menu", get(menu))
        .route("/chat/start", post(start_chat))
        .route("/chat", post(chat))
        .route("/chat/:session_id/cart", get(cart))
        .route("/chat/:session_id/cart/:index", delete(remove_line))
        .route("/chat/:session_id/handoff", post(handoff))
}

/// Attaches the session cookie to a JSON body when the session is new.
fn with_session_cookie(body: impl IntoResponse, session_id: &str, is_new: bool) -> Response {
    let mut response = body.into_response();
    if is_new {
        if let Some(cookie) = session_cookie(session_id) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }
    response
}

/// Endpoint: GET /menu
/// Lists every available item and the modifier families.
async fn menu(State(state): State<SharedState>) -> Json<MenuResponse> {
    let items = state.catalog.all().into_iter().cloned().collect();
    let modifiers = state
        .catalog
        .modifier_options()
        .iter()
        .map(|family| (family.name, family.options))
        .collect();

    Json(MenuResponse { items, modifiers })
}

/// Endpoint: POST /chat/start
/// Opens a new session and returns the welcome text.
async fn start_chat(State(state): State<SharedState>) -> Response {
    let (session_id, welcome) = state.open_session();

    let body = Json(ChatResponse {
        session_id: session_id.clone(),
        reply: welcome,
        state: ConversationState::TakingOrder,
    });
    with_session_cookie(body, &session_id, true)
}

/// Endpoint: POST /chat
/// Processes one customer utterance. Unknown or missing sessions are opened
/// on the fly.
async fn chat(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<ChatInput>,
) -> Result<Response> {
    let known = payload
        .session_id
        .or_else(|| session_from_cookie(&headers))
        .filter(|id| state.sessions.contains_key(id));
    let is_new = known.is_none();
    let session_id = match known {
        Some(id) => id,
        None => state.open_session().0,
    };

    let (reply, turn_state) = {
        let mut conversation = state
            .sessions
            .get_mut(&session_id)
            .ok_or_else(|| ApiError::SessionNotFound(session_id.clone()))?;

        let reply = conversation.process_message(&payload.message);
        let turn_state = conversation.state();
        conversation.reset_after_completion();
        (reply, turn_state)
    };

    tracing::debug!(session = %session_id, state = %turn_state, "chat turn processed");

    if is_quit_command(&payload.message) {
        state.close_session(&session_id);
    }

    let body = Json(ChatResponse {
        session_id: session_id.clone(),
        reply,
        state: turn_state,
    });
    Ok(with_session_cookie(body, &session_id, is_new))
}

/// Endpoint: GET /chat/:session_id/cart
/// Returns the session's current cart.
async fn cart(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<CartResponse>> {
    let conversation = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| ApiError::SessionNotFound(session_id.clone()))?;

    let cart = conversation.cart();
    Ok(Json(CartResponse {
        session_id: session_id.clone(),
        lines: cart.lines().to_vec(),
        total: cart.total(),
        summary: cart.summary(),
    }))
}

/// Endpoint: DELETE /chat/:session_id/cart/:index
/// Removes one line (zero-based) from the session's cart.
async fn remove_line(
    State(state): State<SharedState>,
    Path((session_id, index)): Path<(String, usize)>,
) -> Result<Json<RemoveResponse>> {
    let mut conversation = state
        .sessions
        .get_mut(&session_id)
        .ok_or_else(|| ApiError::SessionNotFound(session_id.clone()))?;

    let message = conversation.remove_line(index)?;
    Ok(Json(RemoveResponse {
        session_id: session_id.clone(),
        message,
        total: conversation.cart().total(),
    }))
}

/// Endpoint: POST /chat/:session_id/handoff
/// Marks that a staff member has answered the customer.
async fn handoff(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<HandoffResponse>> {
    let mut conversation = state
        .sessions
        .get_mut(&session_id)
        .ok_or_else(|| ApiError::SessionNotFound(session_id.clone()))?;

    conversation.hand_off_to_human();
    tracing::info!(session = %session_id, "session handed to staff");

    Ok(Json(HandoffResponse {
        session_id: session_id.clone(),
        state: conversation.state(),
    }))
}
