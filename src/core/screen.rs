//! # Screen Descriptors
//!
//! A `Screen` is a plain data description of one full-window view:
//! a unique name, display copy, and the buttons it offers. Nothing in
//! here knows how a screen is painted — the `tui` module turns a
//! descriptor into widgets.
//!
//! Every screen also carries a pair of lifecycle hooks (`on_enter` /
//! `on_exit`). Today they are no-ops; they exist so that future work
//! like starting a GPS session when the map opens has a defined place
//! to land without touching the navigator.

use log::debug;

/// Direction hint for the transition animation.
///
/// Purely presentational: the navigator forwards it to the UI layer
/// and never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideHint {
    #[default]
    None,
    Left,
    Right,
}

/// What a button press means to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Plain navigation to another registered screen.
    GoTo { target: String, hint: SlideHint },
    /// Proximity-gated navigation (the map screen's "Check In").
    CheckIn {
        waypoint: String,
        target: String,
        hint: SlideHint,
    },
    /// Grant a reward, then navigate (the story screen's claim button).
    ClaimReward {
        reward: String,
        target: String,
        hint: SlideHint,
    },
    /// Application-level stop request, not a state-machine transition.
    Exit,
}

/// A labelled button on a screen.
#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

/// Lifecycle hooks invoked by the navigator around a transition.
///
/// The default methods are deliberate no-ops; implementations override
/// only what they need.
pub trait ScreenHooks {
    fn on_enter(&mut self) {}
    fn on_exit(&mut self) {}
}

/// The default hook implementation: does nothing.
pub struct NoopHooks;

impl ScreenHooks for NoopHooks {}

/// One full-window view, identified by a unique name.
pub struct Screen {
    pub name: String,
    pub title: String,
    /// Static body copy, one entry per line.
    pub body: Vec<String>,
    pub buttons: Vec<Button>,
    hooks: Box<dyn ScreenHooks>,
}

impl Screen {
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            body: Vec::new(),
            buttons: Vec::new(),
            hooks: Box::new(NoopHooks),
        }
    }

    pub fn body_line(mut self, line: &str) -> Self {
        self.body.push(line.to_string());
        self
    }

    pub fn button(mut self, label: &str, action: ButtonAction) -> Self {
        self.buttons.push(Button {
            label: label.to_string(),
            action,
        });
        self
    }

    pub fn with_hooks(mut self, hooks: Box<dyn ScreenHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Called by the navigator when this screen becomes current.
    pub(crate) fn enter(&mut self) {
        debug!("Entering screen '{}'", self.name);
        self.hooks.on_enter();
    }

    /// Called by the navigator when this screen stops being current.
    pub(crate) fn leave(&mut self) {
        debug!("Leaving screen '{}'", self.name);
        self.hooks.on_exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_body_and_buttons() {
        let screen = Screen::new("start", "Start")
            .body_line("Welcome")
            .body_line("Press a button")
            .button(
                "Go",
                ButtonAction::GoTo {
                    target: "map_view".to_string(),
                    hint: SlideHint::Left,
                },
            );
        assert_eq!(screen.name, "start");
        assert_eq!(screen.body.len(), 2);
        assert_eq!(screen.buttons.len(), 1);
        assert_eq!(screen.buttons[0].label, "Go");
    }

    #[test]
    fn test_slide_hint_default_is_none() {
        assert_eq!(SlideHint::default(), SlideHint::None);
    }
}
