use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};
use storedesk_engine::VISIBILITY_OVERLAY;
use storedesk_engine::detail::VISIBILITY_HINT;
use storedesk_types::{Effect, Visibility};

use super::component::Component;
use crate::app::App;
use crate::ui::theme::theme_helpers as th;

/// Read-only panel listing the visibility states with the current one marked.
#[derive(Debug, Default)]
pub struct VisibilityComponent;

impl Component for VisibilityComponent {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('v') => vec![Effect::HideOverlay(VISIBILITY_OVERLAY)],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.theme.as_ref();
        let current = app.detail.as_ref().map(|detail| detail.visibility.clone()).unwrap_or_default();

        let mut lines: Vec<Line> = [Visibility::Draft, Visibility::Published, Visibility::Hidden]
            .into_iter()
            .map(|option| {
                let selected = option == current;
                let marker = if selected { "●" } else { "○" };
                let style = if selected {
                    theme.accent_emphasis_style()
                } else {
                    theme.text_secondary_style()
                };
                Line::from(vec![
                    Span::styled(format!(" {marker} "), style),
                    Span::styled(option.label(), style),
                ])
            })
            .collect();
        if let Visibility::Other(raw) = &current {
            lines.push(Line::from(Span::styled(
                format!(" ● {raw} (unrecognized)"),
                theme.status_warning().add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(VISIBILITY_HINT, theme.text_muted_style())));

        frame.render_widget(Clear, rect);
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(th::overlay_block(theme, "Visibility", theme.border_style(true)));
        frame.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::loaded_app;
    use crossterm::event::KeyModifiers;

    #[test]
    fn esc_hides_visibility_overlay() {
        let mut app = loaded_app();
        let effects = VisibilityComponent.handle_key_events(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(effects, vec![Effect::HideOverlay(VISIBILITY_OVERLAY)]);
    }
}
