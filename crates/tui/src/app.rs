//! Application state for the edit-collection page.
//!
//! `App` owns everything the components read while rendering: the loaded
//! collection and its view model, the add-product workflow, overlay
//! visibility, and the active filter tab. Background results arrive as
//! [`Msg`]s through [`App::update`].

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use storedesk_api::CollectionService;
use storedesk_engine::{AddProductWorkflow, AlertState, CollectionDetailView, FilterCounts, OverlayRegistry, filter_products};
use storedesk_types::{Collection, Effect, Msg, Product, ProductFilter};
use storedesk_util::StoredeskConfig;
use tracing::{debug, warn};

use crate::ui::theme::{self, Theme};

/// Where the page is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Loading,
    Ready,
    NotFound,
    Failed(String),
}

/// Filter tab and table selection inside the product list overlay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProductListState {
    pub filter: ProductFilter,
    pub selected: usize,
}

impl ProductListState {
    pub fn set_filter(&mut self, filter: ProductFilter) {
        self.filter = filter;
        self.selected = 0;
    }

    pub fn select_next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected = (self.selected + 1).min(row_count - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

pub struct App {
    pub config: StoredeskConfig,
    pub service: Arc<dyn CollectionService>,
    /// `<slug>-<id>` the page was opened with
    pub route_slug: String,
    pub page: PageState,
    pub collection: Option<Collection>,
    pub detail: Option<CollectionDetailView>,
    /// Present once the collection is loaded
    pub workflow: Option<AddProductWorkflow>,
    pub overlays: OverlayRegistry,
    pub product_list: ProductListState,
    pub theme: Box<dyn Theme>,
    /// A background task is in flight
    pub executing: bool,
    /// Animation frame for the loading spinner
    pub throbber_idx: usize,
    pub should_quit: bool,
    last_tick: Instant,
}

impl App {
    pub fn new(config: StoredeskConfig, service: Arc<dyn CollectionService>, route_slug: String) -> Self {
        let theme = theme::load(config.theme.as_deref());
        Self {
            config,
            service,
            route_slug,
            page: PageState::Loading,
            collection: None,
            detail: None,
            workflow: None,
            overlays: OverlayRegistry::for_edit_collection(),
            product_list: ProductListState::default(),
            theme,
            executing: false,
            throbber_idx: 0,
            should_quit: false,
            last_tick: Instant::now(),
        }
    }

    /// Effects to run when the page first opens.
    pub fn initial_effects(&self) -> Vec<Effect> {
        vec![Effect::LoadCollection(self.route_slug.clone())]
    }

    pub fn alert(&self) -> Option<&AlertState> {
        self.workflow.as_ref().map(AddProductWorkflow::alert).filter(|alert| alert.is_visible())
    }

    pub fn is_alert_visible(&self) -> bool {
        self.alert().is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.workflow.as_ref().is_some_and(AddProductWorkflow::is_submitting)
    }

    /// Products of the loaded collection passing the active filter tab.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.collection
            .as_ref()
            .map(|collection| filter_products(&collection.products, self.product_list.filter))
            .unwrap_or_default()
    }

    pub fn filter_counts(&self) -> FilterCounts {
        self.collection
            .as_ref()
            .map(|collection| FilterCounts::from_products(&collection.products))
            .unwrap_or_default()
    }

    /// The runtime ticks quickly while this is true.
    pub fn needs_animation(&self) -> bool {
        self.executing || self.is_alert_visible()
    }

    /// Apply an application message. Returns follow-up effects.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => self.on_tick(),
            Msg::Resize(width, height) => {
                debug!(width, height, "terminal resized");
            }
            Msg::CollectionLoaded(collection) => self.on_collection_loaded(collection.as_ref().clone()),
            Msg::CollectionMissing(slug) => {
                debug!(%slug, "collection not found");
                self.page = PageState::NotFound;
            }
            Msg::CollectionLoadFailed(error) => {
                warn!(%error, "collection failed to load");
                self.page = PageState::Failed(error.clone());
            }
            Msg::AddProductFinished(outcome) => {
                if let Some(workflow) = self.workflow.as_mut() {
                    workflow.finish(outcome.clone());
                }
            }
        }
        Vec::new()
    }

    fn on_tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        if self.executing {
            self.throbber_idx = (self.throbber_idx + 1) % 10;
        }
        let timeout = self.config.alert_timeout();
        if let Some(workflow) = self.workflow.as_mut()
            && workflow.alert_mut().tick(elapsed, timeout)
        {
            debug!("alert dismissed after timeout");
        }
    }

    fn on_collection_loaded(&mut self, collection: Collection) {
        self.detail = Some(CollectionDetailView::from_collection(&collection, Utc::now()));
        self.workflow = Some(AddProductWorkflow::new(collection.id.clone()));
        self.product_list = ProductListState::default();
        self.collection = Some(collection);
        self.page = PageState::Ready;
    }

    pub fn dismiss_alert(&mut self) {
        if let Some(workflow) = self.workflow.as_mut() {
            workflow.alert_mut().dismiss();
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use storedesk_api::ApiError;
    use storedesk_engine::ADD_PRODUCT_FAILED;
    use std::time::Duration;
    use storedesk_types::{CollectionId, ProductId, Severity};

    #[derive(Debug, Default)]
    pub(crate) struct NullService;

    #[async_trait]
    impl CollectionService for NullService {
        async fn fetch_collection(&self, _id: &CollectionId) -> Result<Option<Collection>, ApiError> {
            Ok(None)
        }

        async fn add_product(&self, _collection_id: &CollectionId, _product_id: &ProductId) -> Result<String, ApiError> {
            Ok("Added".into())
        }
    }

    pub(crate) fn sample_collection() -> Collection {
        serde_json::from_str(
            r#"{
                "id": 99001,
                "name": "Blue Sofa",
                "slug": "blue-sofa",
                "category": "Living room",
                "price": 1299,
                "visibility": "PUBLISHED",
                "products": [
                    { "id": 10001, "poster": "a.png", "name": "Arm chair", "price": 199, "visibility": "PUBLISHED" },
                    { "id": 10002, "poster": "b.png", "name": "Bench", "price": 99.5, "visibility": "DRAFT" },
                    { "id": 10003, "poster": "c.png", "name": "Cushion", "price": 19, "visibility": "HIDDEN" }
                ]
            }"#,
        )
        .expect("collection fixture")
    }

    pub(crate) fn loaded_app() -> App {
        let mut app = App::new(StoredeskConfig::default(), Arc::new(NullService), "blue-sofa-99001".into());
        app.update(&Msg::CollectionLoaded(Box::new(sample_collection())));
        app
    }

    #[test]
    fn starts_loading_and_requests_collection() {
        let app = App::new(StoredeskConfig::default(), Arc::new(NullService), "blue-sofa-99001".into());
        assert_eq!(app.page, PageState::Loading);
        assert_eq!(app.initial_effects(), vec![Effect::LoadCollection("blue-sofa-99001".into())]);
    }

    #[test]
    fn loaded_collection_builds_view_and_workflow() {
        let app = loaded_app();
        assert_eq!(app.page, PageState::Ready);
        assert_eq!(app.detail.as_ref().map(|d| d.product_count), Some(3));
        assert_eq!(app.workflow.as_ref().map(|w| w.collection_id().as_str()), Some("99001"));
        assert_eq!(app.visible_products().len(), 3);
    }

    #[test]
    fn filter_tab_narrows_visible_products() {
        let mut app = loaded_app();
        app.product_list.set_filter(ProductFilter::Inactive);
        let names: Vec<_> = app.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bench", "Cushion"]);
        assert_eq!(app.filter_counts().published, 1);
    }

    #[test]
    fn missing_collection_switches_to_not_found() {
        let mut app = App::new(StoredeskConfig::default(), Arc::new(NullService), "gone-1".into());
        app.update(&Msg::CollectionMissing("gone-1".into()));
        assert_eq!(app.page, PageState::NotFound);
        assert!(app.workflow.is_none());
    }

    #[test]
    fn failed_add_surfaces_generic_alert() {
        let mut app = loaded_app();
        let workflow = app.workflow.as_mut().expect("workflow");
        workflow.input_mut().set_input("54321");
        workflow.begin_submit().expect("valid input");
        app.update(&Msg::AddProductFinished(Err("503 upstream".into())));

        let alert = app.alert().expect("alert visible");
        assert_eq!(alert.message(), ADD_PRODUCT_FAILED);
        assert_eq!(alert.severity(), Severity::Error);
        assert!(!app.is_submitting());
    }

    #[test]
    fn validation_alert_survives_first_tick_after_idle_gap() {
        let mut app = loaded_app();
        app.last_tick = Instant::now() - Duration::from_millis(4500);
        let workflow = app.workflow.as_mut().expect("workflow");
        workflow.input_mut().set_input("123");
        assert!(workflow.begin_submit().is_err());

        app.update(&Msg::Tick);
        let alert = app.alert().expect("alert still visible");
        assert_eq!(alert.message(), "Product ID must be a 5-digit number");
    }

    #[test]
    fn selection_stays_within_rows() {
        let mut state = ProductListState::default();
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.selected, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
        state.select_next(0);
        assert_eq!(state.selected, 0);
    }
}
