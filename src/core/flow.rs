//! # Game Flow
//!
//! Builds the eight screens and wires their buttons into the
//! transition graph observed in the prototype:
//!
//! ```text
//! start            -> ar_camera_view | how_to_play_screen | (exit)
//! ar_camera_view   -> start | map_view
//! map_view         -> story_screen (check-in) | ar_camera_view
//! story_screen     -> rewards_screen (claim) | map_view
//! rewards_screen   -> map_view
//! how_to_play_screen -> start
//! settings         -> start      (no reachable button targets it)
//! main             -> settings   (likewise unreachable)
//! ```
//!
//! `settings` and `main` are leftovers from an earlier menu experiment:
//! registered, navigable by name, but disconnected from the entry
//! screen's button graph. They are kept that way on purpose rather
//! than wired in or removed.

use crate::core::nav::{NavError, Navigator};
use crate::core::screen::{ButtonAction, Screen, SlideHint};

/// Canonical screen names. These strings are the registry keys and the
/// button targets; everything else refers to screens through them.
pub mod screens {
    pub const START: &str = "start";
    pub const AR_CAMERA: &str = "ar_camera_view";
    pub const MAP: &str = "map_view";
    pub const STORY: &str = "story_screen";
    pub const REWARDS: &str = "rewards_screen";
    pub const HOW_TO_PLAY: &str = "how_to_play_screen";
    pub const SETTINGS: &str = "settings";
    pub const MAIN: &str = "main";
}

fn go(target: &str, hint: SlideHint) -> ButtonAction {
    ButtonAction::GoTo {
        target: target.to_string(),
        hint,
    }
}

/// Builds a navigator with all eight screens registered.
///
/// The caller picks the initial screen with `go_to`; the navigator has
/// no current screen when this returns.
pub fn build_navigator() -> Result<Navigator, NavError> {
    let mut nav = Navigator::new();

    nav.register(
        Screen::new(screens::START, "Relic Hunt")
            .body_line("R E L I C   H U N T")
            .body_line("")
            .body_line("An augmented-reality scavenger hunt.")
            .body_line("Find the waypoints. Follow the story. Claim the relics.")
            .button("Start Hunt", go(screens::AR_CAMERA, SlideHint::Left))
            .button("How To Play", go(screens::HOW_TO_PLAY, SlideHint::Left))
            .button("Exit", ButtonAction::Exit),
    )?;

    nav.register(
        Screen::new(screens::AR_CAMERA, "AR View")
            .body_line("+----------------------------+")
            .body_line("|                            |")
            .body_line("|    [ viewfinder feed ]     |")
            .body_line("|                            |")
            .body_line("+----------------------------+")
            .body_line("")
            .body_line("Point your device at the marked location.")
            .body_line("Camera feed and anchor placement come from the AR engine.")
            .button("Open Map", go(screens::MAP, SlideHint::Left))
            .button("Back", go(screens::START, SlideHint::Right)),
    )?;

    nav.register(
        Screen::new(screens::MAP, "Map")
            .body_line("  .~~~.____.~~~~~.")
            .body_line(" /  forest   (x)  \\")
            .body_line(" \\   trail  .___. /")
            .body_line("  `~~~'~~~~'     `")
            .body_line("")
            .body_line("(x) marks the old mill waypoint.")
            .button(
                "Check In",
                ButtonAction::CheckIn {
                    waypoint: "old_mill".to_string(),
                    target: screens::STORY.to_string(),
                    hint: SlideHint::Left,
                },
            )
            .button("Back to Camera", go(screens::AR_CAMERA, SlideHint::Right)),
    )?;

    nav.register(
        Screen::new(screens::STORY, "Story")
            .body_line("The Keeper steps out from behind the mill wheel.")
            .body_line("")
            .body_line("Keeper: \"You found the old mill. Few do.\"")
            .body_line("Keeper: \"Take the compass — the next mark is farther north.\"")
            .button(
                "Claim Reward",
                ButtonAction::ClaimReward {
                    reward: "bronze_compass".to_string(),
                    target: screens::REWARDS.to_string(),
                    hint: SlideHint::Left,
                },
            )
            .button("Back to Map", go(screens::MAP, SlideHint::Right)),
    )?;

    nav.register(
        Screen::new(screens::REWARDS, "Rewards")
            .body_line("Your pack")
            .body_line("")
            .body_line("(rewards are not kept between sessions yet)")
            .button("Back to Map", go(screens::MAP, SlideHint::Right)),
    )?;

    nav.register(
        Screen::new(screens::HOW_TO_PLAY, "How To Play")
            .body_line("1. Start the hunt to open the AR view.")
            .body_line("2. Use the map to find the next waypoint.")
            .body_line("3. Check in at a waypoint to meet its character.")
            .body_line("4. Claim the reward they offer.")
            .button("Back", go(screens::START, SlideHint::Right)),
    )?;

    nav.register(
        Screen::new(screens::SETTINGS, "Settings")
            .body_line("Sound: on        (placeholder)")
            .body_line("Vibration: on    (placeholder)")
            .button("Back", go(screens::START, SlideHint::Right)),
    )?;

    nav.register(
        Screen::new(screens::MAIN, "Main")
            .body_line("Early menu prototype.")
            .button("Settings", go(screens::SETTINGS, SlideHint::Left)),
    )?;

    Ok(nav)
}
