//! Data models for cards, colors and scheduler state.
//!
//! This module contains the core data structures used throughout the crate.
//! Models are designed to be independent of the rendering and host layers.

pub mod card;
pub mod rgb;

// Re-export all model types
pub use card::{CardId, CardQueue, CardSnapshot, CardType};
pub use rgb::RgbColor;
