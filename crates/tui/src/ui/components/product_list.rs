//! Product list overlay: filter tabs, the add-by-ID input and the product
//! table for the loaded collection.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Cell, Clear, Paragraph, Row, Table, TableState},
};
use storedesk_engine::{AddProductWorkflow, PRODUCT_LIST_OVERLAY};
use storedesk_types::{Effect, Product, ProductFilter};
use storedesk_util::format_price;

use super::component::Component;
use super::throbber_frame;
use crate::app::App;
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::truncate_with_ellipsis;

const POSTER_WIDTH: usize = 24;

#[derive(Debug, Default)]
pub struct ProductListComponent;

impl ProductListComponent {
    fn submit(workflow: &mut AddProductWorkflow) -> Vec<Effect> {
        match workflow.begin_submit() {
            Ok(request) => vec![Effect::AddProduct {
                collection_id: request.collection_id,
                product_id: request.product_id,
            }],
            // Validation failures raise their own alert; in-flight re-entry is ignored.
            Err(_) => Vec::new(),
        }
    }
}

impl Component for ProductListComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let row_count = app.visible_products().len();
        match key.code {
            KeyCode::Esc => return vec![Effect::HideOverlay(PRODUCT_LIST_OVERLAY)],
            KeyCode::Tab => {
                let next = app.product_list.filter.next();
                app.product_list.set_filter(next);
                return Vec::new();
            }
            KeyCode::BackTab => {
                let prev = app.product_list.filter.prev();
                app.product_list.set_filter(prev);
                return Vec::new();
            }
            KeyCode::Down => {
                app.product_list.select_next(row_count);
                return Vec::new();
            }
            KeyCode::Up => {
                app.product_list.select_prev();
                return Vec::new();
            }
            _ => {}
        }

        let Some(workflow) = app.workflow.as_mut() else {
            return Vec::new();
        };
        if workflow.is_submitting() {
            return Vec::new();
        }
        if key.code == KeyCode::Enter {
            return Self::submit(workflow);
        }
        let input = workflow.input_mut();
        match key.code {
            KeyCode::Char(c) => {
                input.insert_char(c);
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_paste(&mut self, app: &mut App, text: &str) -> Vec<Effect> {
        if let Some(workflow) = app.workflow.as_mut()
            && !workflow.is_submitting()
        {
            workflow.input_mut().paste(text);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.theme.as_ref();
        frame.render_widget(Clear, rect);
        let block = th::overlay_block(theme, "Products", theme.border_style(true));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        render_tabs(frame, rows[0], app);
        render_input(frame, rows[1], app);
        render_table(frame, rows[2], app);

        let hints = Line::from(vec![
            Span::styled(" Tab ", th::badge_style(theme)),
            Span::styled(" filter  ", theme.text_muted_style()),
            Span::styled(" Enter ", th::badge_style(theme)),
            Span::styled(" add  ", theme.text_muted_style()),
            Span::styled(" Esc ", th::badge_style(theme)),
            Span::styled(" close", theme.text_muted_style()),
        ]);
        frame.render_widget(Paragraph::new(hints), rows[3]);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.as_ref();
    let counts = app.filter_counts();
    let titles: Vec<Line> = ProductFilter::ALL_TAGS
        .iter()
        .map(|filter| Line::from(counts.tab_label(*filter)))
        .collect();
    let index = ProductFilter::ALL_TAGS
        .iter()
        .position(|filter| *filter == app.product_list.filter)
        .unwrap_or_default();
    frame.render_widget(th::tabs(theme, titles, index), area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.as_ref();
    let Some(workflow) = app.workflow.as_ref() else {
        return;
    };
    let submitting = workflow.is_submitting();
    let input = workflow.input();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(area);

    let text = if input.is_empty() {
        Span::styled("5-digit product ID", theme.text_muted_style())
    } else {
        Span::styled(input.value().to_string(), th::input_style(theme, !submitting))
    };
    let field = Paragraph::new(Line::from(text)).block(th::block(theme, Some("Add product"), !submitting));
    frame.render_widget(field, columns[0]);

    let marker = if submitting {
        Span::styled(throbber_frame(app.throbber_idx), theme.accent_emphasis_style())
    } else {
        Span::styled("+", theme.accent_primary_style().add_modifier(Modifier::BOLD))
    };
    frame.render_widget(
        Paragraph::new(Line::from(marker))
            .alignment(Alignment::Center)
            .block(th::block(theme, None, false)),
        columns[1],
    );

    if !submitting && !app.is_alert_visible() {
        let x = columns[0].x + 1 + input.cursor() as u16;
        frame.set_cursor_position((x.min(columns[0].right().saturating_sub(2)), columns[0].y + 1));
    }
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.as_ref();
    let products = app.visible_products();
    if products.is_empty() {
        let empty = Paragraph::new(Span::styled("No products match this filter", theme.text_muted_style()))
            .block(th::block(theme, None, false));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["#", "Poster", "Name", "Price", "Visibility"].map(Cell::from))
        .style(th::table_header_row_style(theme).patch(th::table_header_style(theme)))
        .height(1);
    let rows: Vec<Row> = products
        .iter()
        .enumerate()
        .map(|(index, product)| product_row(theme, index, product))
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(POSTER_WIDTH as u16),
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(11),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(th::block(theme, None, false))
        .row_highlight_style(th::table_selected_style(theme))
        .column_spacing(1);

    let mut state = TableState::default().with_selected(Some(app.product_list.selected.min(products.len() - 1)));
    frame.render_stateful_widget(table, area, &mut state);
}

fn product_row<'a>(theme: &dyn Theme, index: usize, product: &Product) -> Row<'a> {
    let style = if product.visibility.is_published() {
        theme.status_success()
    } else {
        theme.text_muted_style()
    };
    Row::new(vec![
        Cell::from(format!("{}", index + 1)),
        Cell::from(truncate_with_ellipsis(&product.poster, POSTER_WIDTH)),
        Cell::from(product.name.clone()),
        Cell::from(format_price(product.price)),
        Cell::from(product.visibility.label()),
    ])
    .style(th::table_row_style(theme, index).patch(style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::loaded_app;
    use crossterm::event::KeyModifiers;
    use storedesk_types::CollectionId;

    fn press(component: &mut ProductListComponent, app: &mut App, code: KeyCode) -> Vec<Effect> {
        component.handle_key_events(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn input_value(app: &App) -> String {
        app.workflow.as_ref().map(|w| w.input().value().to_string()).unwrap_or_default()
    }

    #[test]
    fn typing_keeps_digits_only() {
        let mut app = loaded_app();
        let mut list = ProductListComponent;
        for c in "12a34".chars() {
            press(&mut list, &mut app, KeyCode::Char(c));
        }
        assert_eq!(input_value(&app), "1234");
        press(&mut list, &mut app, KeyCode::Backspace);
        assert_eq!(input_value(&app), "123");
    }

    #[test]
    fn paste_is_filtered() {
        let mut app = loaded_app();
        ProductListComponent.handle_paste(&mut app, " 12-34 5");
        assert_eq!(input_value(&app), "12345");
    }

    #[test]
    fn enter_with_valid_id_requests_add_once() {
        let mut app = loaded_app();
        let mut list = ProductListComponent;
        ProductListComponent.handle_paste(&mut app, "12345");
        let effects = press(&mut list, &mut app, KeyCode::Enter);
        assert_eq!(effects.len(), 1);
        assert!(matches!(
            &effects[0],
            Effect::AddProduct { collection_id, product_id }
                if *collection_id == CollectionId::from("99001") && product_id.as_str() == "12345"
        ));
        assert!(app.is_submitting());

        assert!(press(&mut list, &mut app, KeyCode::Enter).is_empty());
        press(&mut list, &mut app, KeyCode::Char('9'));
        assert_eq!(input_value(&app), "12345");
    }

    #[test]
    fn enter_with_short_id_raises_alert_without_request() {
        let mut app = loaded_app();
        let mut list = ProductListComponent;
        ProductListComponent.handle_paste(&mut app, "123");
        assert!(press(&mut list, &mut app, KeyCode::Enter).is_empty());
        assert_eq!(app.alert().map(|a| a.message()), Some("Product ID must be a 5-digit number"));
    }

    #[test]
    fn tab_cycles_filters_and_esc_closes() {
        let mut app = loaded_app();
        let mut list = ProductListComponent;
        press(&mut list, &mut app, KeyCode::Tab);
        assert_eq!(app.product_list.filter, ProductFilter::Published);
        press(&mut list, &mut app, KeyCode::BackTab);
        press(&mut list, &mut app, KeyCode::BackTab);
        assert_eq!(app.product_list.filter, ProductFilter::Inactive);
        assert_eq!(
            press(&mut list, &mut app, KeyCode::Esc),
            vec![Effect::HideOverlay(PRODUCT_LIST_OVERLAY)]
        );
    }
}
