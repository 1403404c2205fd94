//! Layout helpers shared by the components.

use ratatui::prelude::*;

/// Creates a centered rectangle `percent_x` wide and `percent_y` tall
/// within `r`. Used for overlays and the alert toast.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Centered rectangle with a fixed height, clamped to `r`.
pub fn centered_fixed_height(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let width = r.width.saturating_mul(percent_x) / 100;
    Rect {
        x: r.x + (r.width.saturating_sub(width)) / 2,
        y: r.y + (r.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Truncate `text` to `max` characters, marking the cut with an ellipsis.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(max - 1).collect();
    truncated.push('…');
    truncated
}
