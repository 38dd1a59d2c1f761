use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the props pattern: they receive data via struct
/// fields and render into a `Frame` within a given `Rect`. None of
/// them reach into global state.
///
/// # Mutability
///
/// `render` takes `&mut self` so components can update internal
/// presentation caches during the render pass. This aligns with
/// Ratatui's `StatefulWidget` pattern, even though the current
/// components happen to be stateless.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
