//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! Rendering reads the application state and records clickable regions;
//! it never changes friends, selection or form contents.

pub mod add_friend;
pub mod button;
pub mod field;
pub mod friend_list;
pub mod layout;
pub mod popup;
pub mod split_bill;
pub mod theme;

use ratatui::{
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::{ActiveView, AppState, Focus};

use self::add_friend::AddFriendPanel;
use self::button::{Button, ClickTarget, HitZones};
use self::friend_list::FriendList;
use self::layout::AppLayout;
use self::popup::HelpPopup;
use self::split_bill::SplitBillPanel;
use self::theme::Theme;

/// Draw one frame and refresh `state.hit_zones` for mouse handling.
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = AppLayout::from_area(frame.area(), state.add_friend_open);
    let mut zones = HitZones::default();

    let list_block = Block::default()
        .title(format!(" Friends ({}) ", state.friends.len()))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if state.focus == Focus::FriendList {
            Theme::focused_border_style()
        } else {
            Theme::border_style()
        });
    let list = FriendList::new(&state.friends, state.selected.as_ref())
        .focused(state.focus == Focus::FriendList)
        .block(list_block);
    frame.render_stateful_widget(list, layout.list_area, &mut state.list_state);
    for row in &state.list_state.rendered {
        zones.push(row.row, ClickTarget::FriendRow(row.index));
        zones.push(row.button, ClickTarget::SelectFriend(row.id.clone()));
    }

    let buf = frame.buffer_mut();
    if state.add_friend_open {
        AddFriendPanel {
            form: &state.add_friend_form,
            focus: state.focus,
        }
        .render_and_hit(layout.add_friend_area, buf, &mut zones);
    }

    let toggle_label = if state.add_friend_open { "Close" } else { "Add Friend" };
    Button::new(toggle_label)
        .focused(state.focus == Focus::AddFriendToggle)
        .render_and_hit(layout.toggle_area, buf, &mut zones, ClickTarget::ToggleAddFriend);

    SplitBillPanel {
        friend: state.selected_friend(),
        form: &state.split_form,
        focus: state.focus,
    }
    .render_and_hit(layout.split_area, buf, &mut zones);

    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    if state.active_view == ActiveView::Help {
        frame.render_widget(HelpPopup { config: &state.config }, frame.area());
        // The overlay swallows clicks; nothing underneath is reachable.
        zones = HitZones::default();
    }

    if let Some(cursor) = zones.cursor {
        frame.set_cursor_position(cursor);
    }
    state.hit_zones = zones;
}
