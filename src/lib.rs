//! Relic Hunt library exports.
//!
//! The binary in `main.rs` is a thin shell over these modules; the
//! library surface exists so integration tests can drive the game
//! flow without a terminal.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
