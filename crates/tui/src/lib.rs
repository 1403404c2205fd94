//! # Storedesk TUI
//!
//! Terminal front end for the admin edit-collection page. The page shows a
//! collection's details and hosts two overlays: the product list (filter
//! tabs, add-by-ID input, product table) and the visibility panel.
//!
//! ## Architecture
//!
//! State lives in [`app::App`]. Components translate key events into
//! [`storedesk_types::Effect`]s, `cmd` turns effects into background tasks,
//! and the tasks report back as [`storedesk_types::Msg`]s that the runtime
//! feeds into `App::update`.

mod app;
mod cmd;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use storedesk_api::CollectionService;
use storedesk_util::StoredeskConfig;

/// Runs the edit-collection page for `route_slug` until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be put into (or restored from)
/// raw mode and the alternate screen, or when drawing fails.
pub async fn run(config: StoredeskConfig, service: Arc<dyn CollectionService>, route_slug: String) -> Result<()> {
    ui::runtime::run_app(config, service, route_slug).await
}
