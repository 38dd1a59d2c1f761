//! # Navigator
//!
//! The screen-navigation state machine: a registry of uniquely named
//! screens and a single "current screen" pointer.
//!
//! ```text
//! registry: name -> Screen     (keys unique, fixed after startup)
//! current:  Option<name>       (always a registry member once set)
//! ```
//!
//! Exactly one screen is current at any time after the initial
//! transition. A failed `go_to` leaves `current` untouched, so the
//! invariant survives bad requests. Registration and navigation
//! mistakes are programmer errors and surface immediately as
//! [`NavError`] — they are never retried or swallowed here.

use std::collections::HashMap;
use std::fmt;

use log::{debug, info};

use crate::core::screen::{Screen, SlideHint};

/// Errors raised by the navigator. Both indicate programmer mistakes
/// (a mis-wired button or a double registration), not runtime faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    DuplicateName(String),
    UnknownScreen(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::DuplicateName(name) => {
                write!(f, "screen '{name}' is already registered")
            }
            NavError::UnknownScreen(name) => {
                write!(f, "no screen registered under '{name}'")
            }
        }
    }
}

impl std::error::Error for NavError {}

/// A transition request: where to go, and which way the presentation
/// should slide getting there. The hint never affects logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub target: String,
    pub hint: SlideHint,
}

impl Transition {
    pub fn new(target: &str, hint: SlideHint) -> Self {
        Self {
            target: target.to_string(),
            hint,
        }
    }
}

/// Holds the registered screens and the single active one.
#[derive(Default)]
pub struct Navigator {
    registry: HashMap<String, Screen>,
    current: Option<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a screen under its own name.
    ///
    /// The registry is unchanged when the name is already taken.
    pub fn register(&mut self, screen: Screen) -> Result<(), NavError> {
        if self.registry.contains_key(&screen.name) {
            return Err(NavError::DuplicateName(screen.name.clone()));
        }
        debug!("Registered screen '{}'", screen.name);
        self.registry.insert(screen.name.clone(), screen);
        Ok(())
    }

    /// Makes the named screen current.
    ///
    /// Invokes `on_exit` on the outgoing screen (if any) before
    /// `on_enter` on the incoming one. On an unknown name, `current`
    /// is left unchanged. Re-entering the current screen succeeds and
    /// still runs both hooks.
    pub fn go_to(&mut self, name: &str) -> Result<(), NavError> {
        if !self.registry.contains_key(name) {
            return Err(NavError::UnknownScreen(name.to_string()));
        }
        if let Some(prev) = self.current.take()
            && let Some(screen) = self.registry.get_mut(&prev)
        {
            screen.leave();
        }
        if let Some(screen) = self.registry.get_mut(name) {
            screen.enter();
        }
        info!("Transition -> '{name}'");
        self.current = Some(name.to_string());
        Ok(())
    }

    /// Handles a transition request. The direction hint is logged and
    /// otherwise ignored here; the caller forwards it to presentation.
    pub fn request(&mut self, transition: &Transition) -> Result<(), NavError> {
        debug!(
            "Transition requested: target='{}' hint={:?}",
            transition.target, transition.hint
        );
        self.go_to(&transition.target)
    }

    /// Name of the active screen, `None` before the first transition.
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The active screen's descriptor, for rendering.
    pub fn current(&self) -> Option<&Screen> {
        self.current
            .as_deref()
            .and_then(|name| self.registry.get(name))
    }

    pub fn screen(&self, name: &str) -> Option<&Screen> {
        self.registry.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screen::ScreenHooks;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn nav_with(names: &[&str]) -> Navigator {
        let mut nav = Navigator::new();
        for name in names {
            nav.register(Screen::new(name, name)).unwrap();
        }
        nav
    }

    const ALL_SCREENS: [&str; 8] = [
        "start",
        "ar_camera_view",
        "map_view",
        "story_screen",
        "rewards_screen",
        "how_to_play_screen",
        "settings",
        "main",
    ];

    #[test]
    fn test_go_to_sets_current_for_every_registered_screen() {
        let mut nav = nav_with(&ALL_SCREENS);
        for name in ALL_SCREENS {
            nav.go_to(name).unwrap();
            assert_eq!(nav.current_name(), Some(name));
        }
    }

    #[test]
    fn test_go_to_unknown_name_errors_and_leaves_current() {
        let mut nav = nav_with(&["start"]);
        nav.go_to("start").unwrap();
        let err = nav.go_to("warp_zone").unwrap_err();
        assert_eq!(err, NavError::UnknownScreen("warp_zone".to_string()));
        assert_eq!(nav.current_name(), Some("start"));
    }

    #[test]
    fn test_duplicate_register_errors_and_leaves_registry() {
        let mut nav = nav_with(&["start"]);
        let err = nav.register(Screen::new("start", "Other")).unwrap_err();
        assert_eq!(err, NavError::DuplicateName("start".to_string()));
        assert_eq!(nav.len(), 1);
        // The original descriptor survives.
        assert_eq!(nav.screen("start").unwrap().title, "start");
    }

    #[test]
    fn test_happy_path_walk_through_the_game() {
        let mut nav = nav_with(&ALL_SCREENS);
        nav.go_to("start").unwrap();
        for step in [
            "ar_camera_view",
            "map_view",
            "story_screen",
            "rewards_screen",
            "map_view",
        ] {
            nav.go_to(step).unwrap();
            assert_eq!(nav.current_name(), Some(step));
        }
    }

    #[test]
    fn test_orphan_screens_are_reachable_by_direct_request() {
        // 'settings' and 'main' are registered but no reachable button
        // targets them; a direct go_to must still work.
        let mut nav = nav_with(&ALL_SCREENS);
        nav.go_to("start").unwrap();
        nav.go_to("settings").unwrap();
        assert_eq!(nav.current_name(), Some("settings"));
        nav.go_to("main").unwrap();
        assert_eq!(nav.current_name(), Some("main"));
    }

    #[test]
    fn test_go_to_is_idempotent() {
        let mut nav = nav_with(&["start", "map_view"]);
        nav.go_to("map_view").unwrap();
        nav.go_to("map_view").unwrap();
        assert_eq!(nav.current_name(), Some("map_view"));
    }

    #[test]
    fn test_request_forwards_target_and_ignores_hint() {
        let mut nav = nav_with(&["start", "map_view"]);
        nav.go_to("start").unwrap();
        nav.request(&Transition::new("map_view", SlideHint::Left))
            .unwrap();
        assert_eq!(nav.current_name(), Some("map_view"));
    }

    struct RecordingHooks {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl ScreenHooks for RecordingHooks {
        fn on_enter(&mut self) {
            self.log.borrow_mut().push(format!("enter:{}", self.tag));
        }
        fn on_exit(&mut self) {
            self.log.borrow_mut().push(format!("exit:{}", self.tag));
        }
    }

    #[test]
    fn test_outgoing_exit_runs_before_incoming_enter() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut nav = Navigator::new();
        for tag in ["a", "b"] {
            nav.register(Screen::new(tag, tag).with_hooks(Box::new(RecordingHooks {
                tag,
                log: log.clone(),
            })))
            .unwrap();
        }
        nav.go_to("a").unwrap();
        nav.go_to("b").unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["enter:a".to_string(), "exit:a".to_string(), "enter:b".to_string()]
        );
    }

    #[test]
    fn test_current_name_is_none_before_first_transition() {
        let nav = nav_with(&["start"]);
        assert_eq!(nav.current_name(), None);
        assert!(nav.current().is_none());
    }
}
