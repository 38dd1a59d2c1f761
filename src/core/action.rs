//! # Actions
//!
//! Everything that can happen in the game becomes an `Action`.
//! Player presses a screen button? That's `Action::Press(..)`.
//! Ctrl+C? That's `Action::Quit`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state, returning an `Effect` for the shell to run.
//! No I/O here beyond logging; drawing and key handling happen in the
//! `tui` adapter.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! A failed navigation (mis-wired button) is logged and shown in the
//! status message; the navigator guarantees its own state is untouched.

use log::{error, info};

use crate::core::nav::Transition;
use crate::core::screen::{ButtonAction, SlideHint};
use crate::core::state::App;

/// A line the Keeper says when the player checks in at a waypoint.
/// Routed through the speech seam rather than hard-coded playback.
const CHECK_IN_LINE: &str = "You found the old mill. Few do.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A button on the current screen was pressed.
    Press(ButtonAction),
    /// Application-level stop request (force quit).
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A transition happened; animate with this hint and reset selection.
    Slide(SlideHint),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
        Action::Press(ButtonAction::Exit) => {
            info!("Exit pressed on '{}'", app.nav.current_name().unwrap_or("?"));
            Effect::Quit
        }
        Action::Press(ButtonAction::GoTo { target, hint }) => {
            navigate(app, &Transition::new(&target, hint))
        }
        Action::Press(ButtonAction::CheckIn {
            waypoint,
            target,
            hint,
        }) => {
            if !app.proximity.near_waypoint(&waypoint) {
                app.status_message = format!("Too far from '{waypoint}' to check in.");
                return Effect::None;
            }
            let effect = navigate(app, &Transition::new(&target, hint));
            if matches!(effect, Effect::Slide(_)) {
                app.status_message = format!("Checked in at '{waypoint}'.");
                app.speech.speak(CHECK_IN_LINE);
            }
            effect
        }
        Action::Press(ButtonAction::ClaimReward {
            reward,
            target,
            hint,
        }) => {
            app.ledger.grant(&reward);
            let effect = navigate(app, &Transition::new(&target, hint));
            if matches!(effect, Effect::Slide(_)) {
                app.status_message = format!("Claimed '{reward}'.");
            }
            effect
        }
    }
}

fn navigate(app: &mut App, transition: &Transition) -> Effect {
    match app.nav.request(transition) {
        Ok(()) => {
            app.status_message.clear();
            Effect::Slide(transition.hint)
        }
        Err(e) => {
            error!("Navigation failed: {e}");
            app.status_message = format!("Navigation failed: {e}");
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flow::screens;
    use crate::test_support::{FixedProximity, test_app, test_app_with_services};

    fn press_goto(target: &str) -> Action {
        Action::Press(ButtonAction::GoTo {
            target: target.to_string(),
            hint: SlideHint::Left,
        })
    }

    #[test]
    fn test_goto_press_changes_screen_and_slides() {
        let mut app = test_app();
        let effect = update(&mut app, press_goto(screens::AR_CAMERA));
        assert_eq!(effect, Effect::Slide(SlideHint::Left));
        assert_eq!(app.nav.current_name(), Some(screens::AR_CAMERA));
    }

    #[test]
    fn test_goto_unknown_target_keeps_screen_and_reports() {
        let mut app = test_app();
        let effect = update(&mut app, press_goto("warp_zone"));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.nav.current_name(), Some(screens::START));
        assert!(app.status_message.contains("warp_zone"));
    }

    #[test]
    fn test_check_in_advances_and_speaks_when_near() {
        let (mut app, ledger, speech) = test_app_with_services(FixedProximity(true));
        app.nav.go_to(screens::MAP).unwrap();
        let effect = update(
            &mut app,
            Action::Press(ButtonAction::CheckIn {
                waypoint: "old_mill".to_string(),
                target: screens::STORY.to_string(),
                hint: SlideHint::Left,
            }),
        );
        assert_eq!(effect, Effect::Slide(SlideHint::Left));
        assert_eq!(app.nav.current_name(), Some(screens::STORY));
        assert_eq!(speech.borrow().len(), 1);
        assert!(ledger.borrow().is_empty());
    }

    #[test]
    fn test_check_in_blocked_when_far() {
        let (mut app, _ledger, speech) = test_app_with_services(FixedProximity(false));
        app.nav.go_to(screens::MAP).unwrap();
        let effect = update(
            &mut app,
            Action::Press(ButtonAction::CheckIn {
                waypoint: "old_mill".to_string(),
                target: screens::STORY.to_string(),
                hint: SlideHint::Left,
            }),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.nav.current_name(), Some(screens::MAP));
        assert!(app.status_message.contains("Too far"));
        assert!(speech.borrow().is_empty());
    }

    #[test]
    fn test_claim_reward_grants_then_navigates() {
        let (mut app, ledger, _speech) = test_app_with_services(FixedProximity(true));
        app.nav.go_to(screens::STORY).unwrap();
        let effect = update(
            &mut app,
            Action::Press(ButtonAction::ClaimReward {
                reward: "bronze_compass".to_string(),
                target: screens::REWARDS.to_string(),
                hint: SlideHint::Left,
            }),
        );
        assert_eq!(effect, Effect::Slide(SlideHint::Left));
        assert_eq!(app.nav.current_name(), Some(screens::REWARDS));
        assert_eq!(*ledger.borrow(), vec!["bronze_compass".to_string()]);
    }

    #[test]
    fn test_exit_and_quit_produce_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Press(ButtonAction::Exit)), Effect::Quit);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
