pub mod alert;
pub mod collection_detail;
pub mod component;
pub mod product_list;
pub mod visibility;

pub use alert::AlertComponent;
pub use collection_detail::CollectionDetailComponent;
pub(crate) use component::Component;
pub use product_list::ProductListComponent;
pub use visibility::VisibilityComponent;

static FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for animation frame `index`.
pub fn throbber_frame(index: usize) -> &'static str {
    FRAMES[index % FRAMES.len()]
}
