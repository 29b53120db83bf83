//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by the add-friend form (two labelled inputs, a button and
/// the border).
pub const ADD_FRIEND_HEIGHT: u16 = 8;

/// Primary screen layout: sidebar (friend list, add-friend form, toggle
/// button) on the left, split-bill pane on the right, status bar below.
pub struct AppLayout {
    pub list_area: Rect,
    /// Empty when the add-friend form is hidden.
    pub add_friend_area: Rect,
    pub toggle_area: Rect,
    pub split_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, add_friend_open: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // panes
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let form_height = if add_friend_open { ADD_FRIEND_HEIGHT } else { 0 };
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),              // friend list
                Constraint::Length(form_height), // add-friend form
                Constraint::Length(1),           // Add Friend / Close button
            ])
            .split(panes[0]);

        Self {
            list_area: sidebar[0],
            add_friend_area: sidebar[1],
            toggle_area: sidebar[2],
            split_area: panes[1],
            status_area: rows[1],
        }
    }
}

/// Create a centered rectangle with fixed dimensions, clamped to the
/// available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
