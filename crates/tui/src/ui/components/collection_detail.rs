//! Edit-collection page: basic details, campaign status, visibility and a
//! product summary. Also renders the loading, not-found and failure states.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use storedesk_engine::detail::{BASIC_DETAILS_HINT, CAMPAIGN_HINT, VISIBILITY_HINT};
use storedesk_engine::{CollectionDetailView, PRODUCT_LIST_OVERLAY, VISIBILITY_OVERLAY};
use storedesk_types::Effect;

use super::component::Component;
use super::throbber_frame;
use crate::app::{App, PageState};
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::centered_fixed_height;

#[derive(Debug, Default)]
pub struct CollectionDetailComponent;

impl Component for CollectionDetailComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') => vec![Effect::Quit],
            KeyCode::Char('p') if app.page == PageState::Ready => vec![Effect::ShowOverlay(PRODUCT_LIST_OVERLAY)],
            KeyCode::Char('v') if app.page == PageState::Ready => vec![Effect::ShowOverlay(VISIBILITY_OVERLAY)],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.theme.as_ref();
        frame.render_widget(Paragraph::new("").style(th::panel_style(theme)), rect);

        match (&app.page, app.detail.as_ref()) {
            (PageState::Ready, Some(detail)) => render_detail(frame, rect, theme, detail),
            (PageState::NotFound, _) => render_message(
                frame,
                rect,
                theme,
                "Collection not found",
                &format!("No collection matches '{}'. Press q to quit.", app.route_slug),
            ),
            (PageState::Failed(error), _) => render_message(
                frame,
                rect,
                theme,
                "Could not load collection",
                &format!("{error}. Press q to quit."),
            ),
            _ => render_message(
                frame,
                rect,
                theme,
                "Loading collection",
                &format!("{} {}", throbber_frame(app.throbber_idx), app.route_slug),
            ),
        }
    }
}

fn render_message(frame: &mut Frame, rect: Rect, theme: &dyn Theme, title: &str, body: &str) {
    let area = centered_fixed_height(60, 5, rect);
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(title.to_string(), theme.accent_emphasis_style())),
        Line::from(""),
        Line::from(Span::styled(body.to_string(), theme.text_secondary_style())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_detail(frame: &mut Frame, rect: Rect, theme: &dyn Theme, detail: &CollectionDetailView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8), Constraint::Length(1)])
        .split(rect);

    let header = Paragraph::new(Line::from(vec![
        Span::styled("Edit collection  ", theme.text_secondary_style()),
        Span::styled(detail.title.clone(), theme.accent_emphasis_style()),
        Span::styled(format!("  #{}", detail.id), theme.text_muted_style()),
    ]))
    .block(th::block(theme, None, false));
    frame.render_widget(header, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let mut basic: Vec<Line> = detail
        .basic_details
        .iter()
        .map(|field| {
            Line::from(vec![
                Span::styled(format!("{:<10}", field.label), th::table_header_style(theme)),
                Span::styled(field.value.clone(), theme.text_primary_style()),
            ])
        })
        .collect();
    basic.push(Line::from(""));
    basic.push(Line::from(Span::styled(BASIC_DETAILS_HINT, theme.text_muted_style())));
    frame.render_widget(
        Paragraph::new(basic)
            .wrap(Wrap { trim: true })
            .block(th::block(theme, Some("Basic details"), false)),
        columns[0],
    );

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(35), Constraint::Percentage(30)])
        .split(columns[1]);

    let campaign = section(theme, detail.campaign_label().to_string(), CAMPAIGN_HINT);
    frame.render_widget(campaign.block(th::block(theme, Some("Campaign"), false)), side[0]);

    let visibility_style = if detail.visibility.is_published() {
        theme.status_success()
    } else {
        theme.text_secondary_style()
    };
    let visibility = Paragraph::new(vec![
        Line::from(Span::styled(detail.visibility.label(), visibility_style.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(VISIBILITY_HINT, theme.text_muted_style())),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(visibility.block(th::block(theme, Some("Visibility"), false)), side[1]);

    let products = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} products", detail.product_count),
            theme.text_primary_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Press p to manage", theme.text_muted_style())),
    ]);
    frame.render_widget(products.block(th::block(theme, Some("Products"), false)), side[2]);

    let hints = Line::from(vec![
        Span::styled(" p ", th::badge_style(theme)),
        Span::styled(" products  ", theme.text_muted_style()),
        Span::styled(" v ", th::badge_style(theme)),
        Span::styled(" visibility  ", theme.text_muted_style()),
        Span::styled(" q ", th::badge_style(theme)),
        Span::styled(" quit", theme.text_muted_style()),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[2]);
}

fn section<'a>(theme: &dyn Theme, value: String, hint: &'a str) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(value, theme.text_primary_style().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(hint, theme.text_muted_style())),
    ])
    .wrap(Wrap { trim: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::loaded_app;
    use crossterm::event::KeyModifiers;

    #[test]
    fn page_keys_open_overlays_once_loaded() {
        let mut app = loaded_app();
        let mut page = CollectionDetailComponent;
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(page.handle_key_events(&mut app, key('p')), vec![Effect::ShowOverlay(PRODUCT_LIST_OVERLAY)]);
        assert_eq!(page.handle_key_events(&mut app, key('v')), vec![Effect::ShowOverlay(VISIBILITY_OVERLAY)]);
        assert_eq!(page.handle_key_events(&mut app, key('q')), vec![Effect::Quit]);

        app.page = PageState::NotFound;
        assert!(page.handle_key_events(&mut app, key('p')).is_empty());
    }
}
