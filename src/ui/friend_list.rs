//! Friend list widget: one three-line row per friend with a balance status
//! and a Select / Close button.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::friend::{BalanceStatus, Friend, FriendId};

use super::button::Button;
use super::theme::Theme;

/// Terminal rows used by one friend.
pub const ROW_HEIGHT: u16 = 3;

// ───────────────────────────────────────── state ─────────────

/// Screen regions of one rendered row, for mouse hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowArea {
    pub index: usize,
    pub id: FriendId,
    pub row: Rect,
    pub button: Rect,
}

/// Persistent state for the list widget.
#[derive(Debug, Default)]
pub struct FriendListState {
    /// Index of the row under the keyboard cursor.
    pub cursor: usize,
    /// First visible row.
    pub offset: usize,
    /// Rows drawn in the last frame.
    pub rendered: Vec<RowArea>,
}

impl FriendListState {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Ensure the cursor row is visible within a viewport of `rows` friends.
    pub fn clamp_scroll(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + rows {
            self.offset = self.cursor - rows + 1;
        }
    }
}

// ───────────────────────────────────────── widget ────────────

/// The list widget itself — created fresh each frame.
pub struct FriendList<'a> {
    friends: &'a [Friend],
    selected: Option<&'a FriendId>,
    focused: bool,
    block: Option<Block<'a>>,
}

impl<'a> FriendList<'a> {
    pub fn new(friends: &'a [Friend], selected: Option<&'a FriendId>) -> Self {
        Self {
            friends,
            selected,
            focused: false,
            block: None,
        }
    }

    /// Show the cursor marker (only while the list has keyboard focus).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl StatefulWidget for FriendList<'_> {
    type State = FriendListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        state.rendered.clear();
        state.cursor = state.cursor.min(self.friends.len().saturating_sub(1));
        let visible = (inner.height / ROW_HEIGHT) as usize;
        state.clamp_scroll(visible);

        let rows = self
            .friends
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(visible);

        for (i, (index, friend)) in rows.enumerate() {
            let row = Rect::new(
                inner.x,
                inner.y + i as u16 * ROW_HEIGHT,
                inner.width,
                ROW_HEIGHT,
            );
            let is_selected = self.selected == Some(&friend.id);
            let has_cursor = self.focused && index == state.cursor;
            let button = render_row(friend, is_selected, has_cursor, row, buf);
            state.rendered.push(RowArea {
                index,
                id: friend.id.clone(),
                row,
                button,
            });
        }
    }
}

/// Draw one friend into `row`, returning the Select / Close button rect.
fn render_row(friend: &Friend, is_selected: bool, has_cursor: bool, row: Rect, buf: &mut Buffer) -> Rect {
    if is_selected {
        buf.set_style(row, Theme::selected_row_style());
    }

    let marker = if has_cursor {
        Span::styled("▸ ", Theme::cursor_style())
    } else {
        Span::raw("  ")
    };

    let status_style = match friend.status() {
        BalanceStatus::YouOwe(_) => Theme::owe_style(),
        BalanceStatus::OwesYou(_) => Theme::owed_style(),
        BalanceStatus::Even => Theme::even_style(),
    };

    let lines = [
        Line::from(vec![marker, Span::styled(friend.name.clone(), Theme::name_style())]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(friend.status_message(), status_style),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(friend.image.clone(), Theme::image_style()),
        ]),
    ];
    for (dy, line) in lines.iter().enumerate() {
        buf.set_line(row.x, row.y + dy as u16, line, row.width);
    }

    let label = if is_selected { "Close" } else { "Select" };
    let button = Button::new(label).focused(has_cursor);
    let width = button.width().min(row.width);
    let rect = Rect::new(row.x + row.width - width, row.y, width, 1);
    button.render(rect, buf);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::friend::seed_friends;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn renders_status_and_button_per_friend() {
        let friends = seed_friends();
        let selected = friends[1].id.clone();
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 9));
        let mut state = FriendListState::default();

        FriendList::new(&friends, Some(&selected))
            .focused(true)
            .render(buf.area, &mut buf, &mut state);

        assert!(row_text(&buf, 0).starts_with("▸ Clark"));
        assert!(row_text(&buf, 0).ends_with("[ Select ]"));
        assert_eq!(row_text(&buf, 1), "  You owe Clark 7");
        assert_eq!(row_text(&buf, 2), "  https://i.pravatar.cc/48?u=118836");
        assert!(row_text(&buf, 3).ends_with("[ Close ]"));
        assert_eq!(row_text(&buf, 4), "  Sarah owes you 20");
        assert_eq!(row_text(&buf, 7), "  You and Anthony are even.");

        assert_eq!(state.rendered.len(), 3);
        assert_eq!(state.rendered[1].id, selected);
        assert_eq!(state.rendered[1].button, Rect::new(41, 3, 9, 1));
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let friends = seed_friends();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 6));
        let mut state = FriendListState {
            cursor: 2,
            ..Default::default()
        };

        FriendList::new(&friends, None).render(buf.area, &mut buf, &mut state);

        assert_eq!(state.offset, 1);
        let indices: Vec<_> = state.rendered.iter().map(|r| r.index).collect();
        assert_eq!(indices, [1, 2]);
        assert!(row_text(&buf, 0).starts_with("  Sarah"));
        assert!(row_text(&buf, 0).ends_with("[ Select ]"));
        assert_eq!(row_text(&buf, 4), "  You and Anthony are even.");
    }

    #[test]
    fn cursor_moves_are_bounded() {
        let mut state = FriendListState::default();
        state.select_prev();
        assert_eq!(state.cursor, 0);
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.cursor, 1);
    }
}
