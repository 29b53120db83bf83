//! The shared button primitive and the click hit-zones it reports.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::app::state::Focus;
use crate::core::friend::FriendId;

use super::theme::Theme;

/// What a left click on a registered region does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// Move the list cursor to this row.
    FriendRow(usize),
    /// The row's Select / Close button.
    SelectFriend(FriendId),
    /// The Add Friend / Close button under the list.
    ToggleAddFriend,
    SubmitAddFriend,
    SubmitSplit,
    TogglePayer,
    /// Focus an input.
    Focus(Focus),
}

/// Clickable regions collected while drawing a frame.
#[derive(Debug, Default)]
pub struct HitZones {
    zones: Vec<(Rect, ClickTarget)>,
    /// Where to place the terminal cursor (inside the focused text input).
    pub cursor: Option<Position>,
}

impl HitZones {
    pub fn push(&mut self, area: Rect, target: ClickTarget) {
        if area.width > 0 && area.height > 0 {
            self.zones.push((area, target));
        }
    }

    /// The topmost target under the pointer.  Later registrations are drawn
    /// on top, so they win.
    pub fn hit(&self, column: u16, row: u16) -> Option<&ClickTarget> {
        let pos = Position::new(column, row);
        self.zones
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| target)
    }
}

/// A clickable label, rendered as `[ label ]`.
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Columns the button occupies.
    pub fn width(&self) -> u16 {
        self.label.chars().count() as u16 + 4
    }

    /// Render at the left of `area` and register the button's rect for
    /// `target`. Nothing is drawn or registered outside the buffer.
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer, zones: &mut HitZones, target: ClickTarget) {
        let rect = Rect {
            width: self.width().min(area.width),
            height: area.height.min(1),
            ..area
        }
        .intersection(buf.area);
        if rect.is_empty() {
            return;
        }
        zones.push(rect, target);
        self.render(rect, buf);
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let style = if self.focused {
            Theme::button_focused_style()
        } else {
            Theme::button_style()
        };
        let line = Line::from(Span::styled(format!("[ {} ]", self.label), style));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
