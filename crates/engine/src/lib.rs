//! # Storedesk Engine
//!
//! Workflow logic behind the edit-collection page, independent of any
//! terminal or HTTP concerns:
//!
//! - [`filter`]: visibility classification of a collection's products and
//!   the tab counts derived from it
//! - [`product_id`]: digits-only identifier input and its validator
//! - [`add_product`]: the add-product state machine
//! - [`overlay`]: the overlay visibility registry
//! - [`detail`] and [`page`]: loading a collection by route slug and shaping
//!   it for display
//! - [`banner`]: the customer-facing promotional banner
//!
//! The backend is reached only through [`storedesk_api::CollectionService`],
//! so every workflow can be driven by an in-memory implementation.

pub mod add_product;
pub mod alert;
pub mod banner;
pub mod detail;
pub mod filter;
pub mod overlay;
pub mod page;
pub mod product_id;

pub use add_product::{ADD_PRODUCT_FAILED, AddOutcome, AddPhase, AddProductRequest, AddProductWorkflow, SubmitError};
pub use alert::AlertState;
pub use banner::PromotionalBanner;
pub use detail::CollectionDetailView;
pub use filter::{FilterCounts, filter_products};
pub use overlay::{OverlayRegistry, PRODUCT_LIST_OVERLAY, VISIBILITY_OVERLAY};
pub use page::{PageError, load_edit_collection};
pub use product_id::{ProductIdInput, ValidationError, validate_product_id};
