use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};
use storedesk_types::{Effect, Severity};

use super::component::Component;
use crate::app::App;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::centered_fixed_height;

/// Modal toast for the add-product workflow's alert message.
#[derive(Debug, Default)]
pub struct AlertComponent;

fn title(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "Notice",
        Severity::Success => "Success",
        Severity::Warning => "Check input",
        Severity::Error => "Error",
    }
}

impl Component for AlertComponent {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => vec![Effect::DismissAlert],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let Some(alert) = app.alert() else {
            return;
        };
        let theme = app.theme.as_ref();
        let severity_style = theme.severity_style(alert.severity());
        let area = centered_fixed_height(50, 6, rect);

        frame.render_widget(Clear, area);
        let body = Paragraph::new(vec![
            Line::from(Span::styled(alert.message().to_string(), theme.text_primary_style())),
            Line::from(""),
            Line::from(Span::styled("Enter / Esc to dismiss", theme.text_muted_style())),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(th::overlay_block(theme, title(alert.severity()), severity_style));
        frame.render_widget(body, area);
    }
}
