//! # Core Game Logic
//!
//! This module contains the game's domain logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (screens)  │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Mobile   │      │  AR engine │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`nav`]: The `Navigator` — the screen-navigation state machine
//! - [`screen`]: `Screen` descriptors — names, copy, buttons, hooks
//! - [`flow`]: The eight game screens and their transition graph
//! - [`services`]: Extension points for proximity, rewards, speech
//! - [`state`]: The `App` struct — all game state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: TOML config with layered resolution

pub mod action;
pub mod config;
pub mod flow;
pub mod nav;
pub mod screen;
pub mod services;
pub mod state;
