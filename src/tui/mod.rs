//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the
//! current screen, and translates keyboard events into core::Action
//! values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is that a different adapter (a mobile shell, a real
//! AR frontend) could replace it without touching `core`.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a slide transition is running): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms in `poll`, only redraws on events or
//!   terminal resize.

mod component;
mod components;
mod event;
mod ui;

use std::time::{Duration, Instant};

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::screen::SlideHint;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long a slide transition runs.
const SLIDE_DURATION: Duration = Duration::from_millis(150);
/// Largest horizontal shift, in columns.
const SLIDE_COLUMNS: u16 = 8;

/// TUI-specific presentation state (not part of core game logic).
pub struct TuiState {
    /// Index of the highlighted button on the current screen.
    pub selected: usize,
    /// Running slide transition, if any.
    slide: Option<(SlideHint, Instant)>,
    /// Animations enabled (from config).
    animations: bool,
}

impl TuiState {
    pub fn new(animations: bool) -> Self {
        Self {
            selected: 0,
            slide: None,
            animations,
        }
    }

    /// Starts a slide in the hinted direction. No-op when animations
    /// are disabled or the hint carries no direction.
    pub fn begin_slide(&mut self, hint: SlideHint) {
        if self.animations && hint != SlideHint::None {
            self.slide = Some((hint, Instant::now()));
        }
    }

    /// Current horizontal offset in columns: positive shifts the
    /// screen right, negative shrinks it from the right. Zero once the
    /// animation window has passed.
    pub fn slide_offset(&self) -> i16 {
        let Some((hint, started)) = self.slide else {
            return 0;
        };
        let elapsed = started.elapsed();
        if elapsed >= SLIDE_DURATION {
            return 0;
        }
        let remaining = 1.0 - elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32();
        let magnitude = (SLIDE_COLUMNS as f32 * remaining).round() as i16;
        match hint {
            SlideHint::Left => -magnitude,
            SlideHint::Right => magnitude,
            SlideHint::None => 0,
        }
    }

    fn animating(&self) -> bool {
        self.slide
            .is_some_and(|(_, started)| started.elapsed() < SLIDE_DURATION)
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(config.animations);
    let mut terminal = ratatui::init();

    info!(
        "TUI starting on screen '{}'",
        app.nav.current_name().unwrap_or("?")
    );

    let mut needs_redraw = true; // Force first frame
    loop {
        let animating = tui.animating();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while animating, long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let button_count = app.nav.current().map_or(0, |s| s.buttons.len());
            match tui_event {
                TuiEvent::Resize => {}
                TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::SelectPrev => {
                    tui.selected = tui.selected.saturating_sub(1);
                }
                TuiEvent::SelectNext => {
                    if tui.selected + 1 < button_count {
                        tui.selected += 1;
                    }
                }
                TuiEvent::Activate => {
                    let index = tui.selected;
                    press_button(&mut app, &mut tui, index, &mut should_quit);
                }
                TuiEvent::PressDigit(index) => {
                    if index < button_count {
                        press_button(&mut app, &mut tui, index, &mut should_quit);
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Presses button `index` on the current screen and applies the effect.
fn press_button(app: &mut App, tui: &mut TuiState, index: usize, should_quit: &mut bool) {
    let Some(action) = app
        .nav
        .current()
        .and_then(|s| s.buttons.get(index))
        .map(|b| b.action.clone())
    else {
        return;
    };
    match update(app, Action::Press(action)) {
        Effect::Quit => *should_quit = true,
        Effect::Slide(hint) => {
            tui.begin_slide(hint);
            tui.selected = 0;
        }
        Effect::None => {}
    }
}
