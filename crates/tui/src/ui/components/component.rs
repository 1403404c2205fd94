//! Component system for the TUI.
//!
//! Components are stateless renderers and key handlers over [`App`]. They
//! never perform I/O; anything effectful is reported back as an [`Effect`].

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use storedesk_types::Effect;

use crate::app::App;

/// A UI element that handles its own slice of input and draws itself.
pub(crate) trait Component {
    /// Handle key events while this component is the input target.
    ///
    /// Returns the effects the runtime should process.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle bracketed paste while this component is the input target.
    fn handle_paste(&mut self, _app: &mut App, _text: &str) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and cursor placement.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
