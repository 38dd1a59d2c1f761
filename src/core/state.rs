//! # Application State
//!
//! Core game state. This module contains domain state only — no TUI
//! types. Presentation state (selection, animation) lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── nav: Navigator                   // registry + current screen
//! ├── proximity: dyn ProximityCheck    // check-in gate
//! ├── ledger: dyn RewardLedger         // reward recording
//! ├── speech: dyn SpeechSynthesizer    // character dialogue
//! └── status_message: String           // status bar text
//! ```
//!
//! State changes only happen through `update(app, action)` in
//! action.rs, so every mutation has one entry point.

use crate::core::nav::Navigator;
use crate::core::services::{
    AlwaysNearby, NullLedger, NullSpeech, ProximityCheck, RewardLedger, SpeechSynthesizer,
};

pub struct App {
    pub nav: Navigator,
    pub proximity: Box<dyn ProximityCheck>,
    pub ledger: Box<dyn RewardLedger>,
    pub speech: Box<dyn SpeechSynthesizer>,
    pub status_message: String,
}

impl App {
    /// Wraps a navigator with the inert default services.
    pub fn new(nav: Navigator) -> Self {
        Self {
            nav,
            proximity: Box::new(AlwaysNearby),
            ledger: Box::new(NullLedger),
            speech: Box::new(NullSpeech),
            status_message: String::from("Welcome, hunter."),
        }
    }
}
