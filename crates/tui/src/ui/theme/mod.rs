//! Theme styling for the TUI.
//!
//! Two palettes (Dracula, Nord) mapped onto semantic roles, plus helper
//! builders for Ratatui widgets. Prefer these helpers over hard-coded
//! colors.

use tracing::debug;

pub mod dracula;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use dracula::DraculaTheme;
pub use nord::NordTheme;
pub use roles::Theme;

/// Resolve a theme by identifier, falling back to Dracula.
///
/// `preferred` comes from the config file or `STOREDESK_THEME`.
pub fn load(preferred: Option<&str>) -> Box<dyn Theme> {
    match preferred.map(|name| name.trim().to_ascii_lowercase()).as_deref() {
        Some("nord") => Box::new(NordTheme::new()),
        Some("dracula") | None => Box::new(DraculaTheme::new()),
        Some(unknown) => {
            debug!(theme = unknown, "unknown theme; using dracula");
            Box::new(DraculaTheme::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names_case_insensitively() {
        assert_eq!(load(Some(" Nord ")).roles().surface, nord::N1);
        assert_eq!(load(Some("DRACULA")).roles().surface, dracula::BG);
        assert_eq!(load(Some("solarized")).roles().surface, dracula::BG);
        assert_eq!(load(None).roles().surface, dracula::BG);
    }
}
