//! Top-level view: routes input to the right layer and draws the page,
//! any visible overlay, and the alert toast in stacking order.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect, widgets::Block};
use storedesk_engine::overlay::should_lock_background;
use storedesk_engine::{PRODUCT_LIST_OVERLAY, VISIBILITY_OVERLAY};
use storedesk_types::{Effect, Msg, OverlayKey};

use super::components::{AlertComponent, CollectionDetailComponent, Component, ProductListComponent, VisibilityComponent};
use super::utils::centered_rect;
use crate::app::App;

#[derive(Debug, Default)]
pub struct MainView {
    page: CollectionDetailComponent,
    product_list: ProductListComponent,
    visibility: VisibilityComponent,
    alert: AlertComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The component receiving input: the alert, then the topmost overlay,
    /// then the page.
    fn input_target(&mut self, app: &App) -> &mut dyn Component {
        if app.is_alert_visible() {
            return &mut self.alert;
        }
        match app.overlays.topmost() {
            Some(key) if key == PRODUCT_LIST_OVERLAY => &mut self.product_list,
            Some(key) if key == VISIBILITY_OVERLAY => &mut self.visibility,
            _ => &mut self.page,
        }
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        self.input_target(app).handle_key_events(app, key)
    }

    pub fn handle_paste(&mut self, app: &mut App, text: &str) -> Vec<Effect> {
        self.input_target(app).handle_paste(app, text)
    }

    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.page.render(frame, area, app);

        let overlay_visible = app.overlays.any_visible();
        if should_lock_background(overlay_visible, app.is_alert_visible()) {
            frame.render_widget(Block::default().style(app.theme.modal_background_style()), area);
        }

        let visible: Vec<OverlayKey> = [PRODUCT_LIST_OVERLAY, VISIBILITY_OVERLAY]
            .into_iter()
            .filter(|key| app.overlays.is_visible(*key))
            .collect();
        for key in visible {
            if key == PRODUCT_LIST_OVERLAY {
                self.product_list.render(frame, centered_rect(90, 85, area), app);
            } else {
                self.visibility.render(frame, centered_rect(60, 50, area), app);
            }
        }

        self.alert.render(frame, area, app);
    }
}
