//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::flow::{self, screens};
use crate::core::services::{ProximityCheck, RewardLedger, SpeechSynthesizer};
use crate::core::state::App;

/// Answers every proximity query with a fixed verdict.
pub struct FixedProximity(pub bool);

impl ProximityCheck for FixedProximity {
    fn near_waypoint(&self, _waypoint: &str) -> bool {
        self.0
    }
}

/// Records grants into a shared log the test keeps a handle to.
pub struct RecordingLedger {
    pub log: Rc<RefCell<Vec<String>>>,
}

impl RewardLedger for RecordingLedger {
    fn grant(&mut self, reward: &str) {
        self.log.borrow_mut().push(reward.to_string());
    }

    fn granted(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

/// Records spoken lines into a shared log.
pub struct RecordingSpeech {
    pub log: Rc<RefCell<Vec<String>>>,
}

impl SpeechSynthesizer for RecordingSpeech {
    fn speak(&mut self, line: &str) {
        self.log.borrow_mut().push(line.to_string());
    }
}

/// Creates an App on the full game flow, positioned on the start screen,
/// with the inert default services.
pub fn test_app() -> App {
    let mut nav = flow::build_navigator().unwrap();
    nav.go_to(screens::START).unwrap();
    App::new(nav)
}

/// Like [`test_app`], but with recording service doubles. Returns the
/// shared logs for the ledger and the speech synthesizer.
#[allow(clippy::type_complexity)]
pub fn test_app_with_services(
    proximity: FixedProximity,
) -> (App, Rc<RefCell<Vec<String>>>, Rc<RefCell<Vec<String>>>) {
    let mut app = test_app();
    let ledger_log = Rc::new(RefCell::new(Vec::new()));
    let speech_log = Rc::new(RefCell::new(Vec::new()));
    app.proximity = Box::new(proximity);
    app.ledger = Box::new(RecordingLedger {
        log: ledger_log.clone(),
    });
    app.speech = Box::new(RecordingSpeech {
        log: speech_log.clone(),
    });
    (app, ledger_log, speech_log)
}
