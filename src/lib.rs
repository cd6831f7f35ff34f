//! drag-confirm - slide-to-confirm control for terminal UIs
//!
//! Core library providing the confirm state machine, the drag-gesture
//! provider it is driven by, and a ratatui rendering of the control.

pub mod config;
pub mod core;
pub mod error;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
