//! # TUI Components
//!
//! All UI components for the terminal interface. Both are stateless,
//! props-based renderers:
//!
//! - `TitleBar`: top bar showing the app name, screen title, and
//!   status message
//! - `ScreenView`: the current screen's body copy and button list
//!
//! Components receive external data as "props" (struct fields), never
//! by reaching into global state. This keeps dependencies explicit and
//! the components testable with `TestBackend`.

mod screen_view;
mod title_bar;

pub use screen_view::ScreenView;
pub use title_bar::TitleBar;
