use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ScreenView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Key help shown in the bottom bar.
const KEY_HELP: &str = "↑/↓ select · Enter press · 1-9 direct · Ctrl+C quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let screen_title = app
        .nav
        .current()
        .map(|s| s.title.clone())
        .unwrap_or_default();
    TitleBar::new(screen_title, app.status_message.clone()).render(frame, title_area);

    if let Some(screen) = app.nav.current() {
        let area = slide_area(main_area, tui);
        ScreenView::new(screen, tui.selected).render(frame, area);
    }

    frame.render_widget(
        Span::styled(KEY_HELP, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

/// Shifts the main area horizontally while a slide animation runs.
/// The offset decays to zero over the animation window; logic is never
/// affected, only where the screen is painted.
fn slide_area(area: Rect, tui: &TuiState) -> Rect {
    let offset = tui.slide_offset();
    if offset == 0 {
        return area;
    }
    let magnitude = offset.unsigned_abs().min(area.width / 2);
    let mut shifted = area;
    shifted.width = area.width.saturating_sub(magnitude);
    if offset > 0 {
        shifted.x = area.x.saturating_add(magnitude);
    }
    shifted
}
