//! Utterance Interpreter Module
//!
//! Turns free text into menu items, quantities and modifier tags using
//! substring and keyword heuristics. There is no language model here.

pub mod extract;
pub mod rules;

pub use extract::{extract_modifiers, extract_quantities, interpret, Interpretation, RequestedItem};
pub use rules::contains_any;
