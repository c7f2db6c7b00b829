//! Kafe Digital Library
//!
//! This library provides a text-based ordering assistant for a café: menu
//! matching, cart accumulation, and a small conversation state machine, plus
//! terminal and HTTP hosts around it.

// Domain modules
pub mod cart;
pub mod conversation;
pub mod interpreter;
pub mod menu;

// Hosts
pub mod repl;
pub mod session;

// Infrastructure
pub mod config;
pub mod error;
pub mod logging;
pub mod router;
