//! Terminal rendering for the `bindigo` binary.
//!
//! Layers, from the bottom up: `theme` tokens, `primitives`, `widgets`,
//! `blocks`, then per-command `views`.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
