//! # Command Execution Layer
//!
//! Translates [`Effect`]s into work. Effects that only touch UI state are
//! applied in place; effects that reach the backend are spawned as tokio
//! tasks whose results come back to the runtime as [`Msg`]s.

use std::sync::Arc;

use storedesk_api::CollectionService;
use storedesk_engine::{PageError, load_edit_collection};
use storedesk_types::{CollectionId, Effect, Msg, ProductId};
use tokio::task::{JoinHandle, spawn};
use tracing::{debug, error};

use crate::app::App;

/// Represents side-effectful commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    FetchCollection(String),
    AddProduct {
        collection_id: CollectionId,
        product_id: ProductId,
    },
}

/// Apply UI-only effects to `app` and convert the rest into [`Cmd`]s.
pub fn from_effects(app: &mut App, effects: Vec<Effect>) -> Vec<Cmd> {
    let mut commands = Vec::new();
    for effect in effects {
        match effect {
            Effect::LoadCollection(route_slug) => commands.push(Cmd::FetchCollection(route_slug)),
            Effect::AddProduct {
                collection_id,
                product_id,
            } => commands.push(Cmd::AddProduct {
                collection_id,
                product_id,
            }),
            Effect::ShowOverlay(key) => app.overlays.show(key),
            Effect::HideOverlay(key) => app.overlays.hide(key),
            Effect::DismissAlert => app.dismiss_alert(),
            Effect::Quit => app.should_quit = true,
        }
    }
    commands
}

/// Run effects: apply state changes and spawn backend work. Each returned
/// handle resolves to the message reporting its outcome.
pub fn run_from_effects(app: &mut App, effects: Vec<Effect>) -> Vec<JoinHandle<Msg>> {
    let commands = from_effects(app, effects);
    run_cmds(Arc::clone(&app.service), commands)
}

/// Spawn each command as a tokio task.
pub fn run_cmds(service: Arc<dyn CollectionService>, commands: Vec<Cmd>) -> Vec<JoinHandle<Msg>> {
    let mut pending = Vec::with_capacity(commands.len());
    for command in commands {
        debug!(?command, "spawning command");
        let service = Arc::clone(&service);
        let handle = match command {
            Cmd::FetchCollection(route_slug) => spawn(async move { fetch_collection(service.as_ref(), route_slug).await }),
            Cmd::AddProduct {
                collection_id,
                product_id,
            } => spawn(async move {
                let outcome = service
                    .add_product(&collection_id, &product_id)
                    .await
                    .map_err(|cause| cause.to_string());
                Msg::AddProductFinished(outcome)
            }),
        };
        pending.push(handle);
    }
    pending
}

async fn fetch_collection(service: &dyn CollectionService, route_slug: String) -> Msg {
    match load_edit_collection(service, &route_slug).await {
        Ok(collection) => Msg::CollectionLoaded(Box::new(collection)),
        Err(PageError::NotFound { slug }) => Msg::CollectionMissing(slug),
        Err(PageError::Api(api_error)) => {
            error!(%route_slug, error = %api_error, "failed to load collection");
            Msg::CollectionLoadFailed(api_error.to_string())
        }
    }
}
