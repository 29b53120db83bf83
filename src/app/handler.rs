//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::core::forms::AmountField;
use crate::core::friend::FriendId;
use crate::core::text_field::TextField;
use crate::ui::button::ClickTarget;

use super::state::{ActiveView, AddFriendField, AppState, Focus, SplitBillField};

/// Process a key event, dispatching based on the active view and focus.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }
    state.status_message = None;

    if state.active_view == ActiveView::Help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            state.active_view = ActiveView::Main;
        }
        return;
    }

    // Focus navigation works the same everywhere.
    match key.code {
        KeyCode::Tab => return state.focus_next(),
        KeyCode::BackTab => return state.focus_prev(),
        KeyCode::Esc if state.focus != Focus::FriendList => {
            state.focus = Focus::FriendList;
            return;
        }
        _ => {}
    }

    match state.focus {
        Focus::FriendList => handle_list_key(state, key),
        Focus::AddFriendToggle => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                toggle_add_friend(state);
            }
        }
        Focus::AddFriend(field) => handle_add_friend_key(state, field, key),
        Focus::SplitBill(field) => handle_split_key(state, field, key),
    }
}

// ── Friend list (configurable bindings) ─────────────────────────

fn handle_list_key(state: &mut AppState, key: KeyEvent) {
    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::OpenHelp => state.active_view = ActiveView::Help,
        Action::MoveUp => state.list_state.select_prev(),
        Action::MoveDown => state.list_state.select_next(state.friends.len()),
        Action::ToggleAddFriend => toggle_add_friend(state),
        Action::ToggleSelect => {
            if let Some(id) = state.cursor_friend().map(|f| f.id.clone()) {
                select_and_focus(state, &id);
            }
        }
    }
}

/// Toggle the add-friend form, moving focus into it when it opens.
fn toggle_add_friend(state: &mut AppState) {
    state.toggle_add_friend_form();
    if state.add_friend_open {
        state.focus = Focus::AddFriend(AddFriendField::Name);
    }
}

/// Toggle selection of `id`, moving focus into the split form when a
/// friend becomes selected.
fn select_and_focus(state: &mut AppState, id: &FriendId) {
    state.select_friend(id);
    if state.is_selected(id) {
        state.focus = Focus::SplitBill(SplitBillField::BillTotal);
    }
}

// ── Add-friend form ─────────────────────────────────────────────

fn handle_add_friend_key(state: &mut AppState, field: AddFriendField, key: KeyEvent) {
    match (field, key.code) {
        (_, KeyCode::Enter) => state.submit_add_friend(),
        (_, KeyCode::Up) => state.focus_prev(),
        (_, KeyCode::Down) => state.focus_next(),
        (AddFriendField::Submit, KeyCode::Char(' ')) => state.submit_add_friend(),
        (AddFriendField::Name, _) => {
            apply_text_edit(&mut state.add_friend_form.name, key);
        }
        (AddFriendField::ImageUrl, _) => {
            apply_text_edit(&mut state.add_friend_form.image_url, key);
        }
        _ => {}
    }
}

// ── Split-bill form ─────────────────────────────────────────────

fn handle_split_key(state: &mut AppState, field: SplitBillField, key: KeyEvent) {
    match (field, key.code) {
        (_, KeyCode::Enter) => state.submit_split(),
        (_, KeyCode::Up) => state.focus_prev(),
        (_, KeyCode::Down) => state.focus_next(),
        (SplitBillField::Payer, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) => {
            state.split_form.toggle_payer();
        }
        (SplitBillField::Submit, KeyCode::Char(' ')) => state.submit_split(),
        (SplitBillField::BillTotal, _) => edit_amount(state, AmountField::BillTotal, key),
        (SplitBillField::UserPaid, _) => edit_amount(state, AmountField::UserPaid, key),
        _ => {}
    }
}

fn edit_amount(state: &mut AppState, field: AmountField, key: KeyEvent) {
    let mut handled = false;
    let result = state.split_form.edit(field, |input| {
        handled = apply_text_edit(input, key);
    });
    if let Err(err) = result {
        tracing::debug!(?field, "amount input refused: {err}");
    } else if !handled {
        tracing::trace!(?key, "key ignored by amount input");
    }
}

/// Apply a line-editing key to `input`.  Returns `false` for keys that are
/// not editing keys.
fn apply_text_edit(input: &mut TextField, key: KeyEvent) -> bool {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return false;
    }
    match key.code {
        KeyCode::Char(ch) => input.insert(ch),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => return false,
    }
    true
}

// ── Mouse ───────────────────────────────────────────────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Main {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            state.active_view = ActiveView::Main;
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(target) = state.hit_zones.hit(mouse.column, mouse.row).cloned() else {
                return;
            };
            state.status_message = None;
            handle_click(state, target);
        }
        MouseEventKind::ScrollUp => state.list_state.select_prev(),
        MouseEventKind::ScrollDown => state.list_state.select_next(state.friends.len()),
        _ => {}
    }
}

fn handle_click(state: &mut AppState, target: ClickTarget) {
    match target {
        ClickTarget::FriendRow(index) => {
            state.list_state.cursor = index;
            state.focus = Focus::FriendList;
        }
        ClickTarget::SelectFriend(id) => {
            if let Some(index) = state.friends.iter().position(|f| f.id == id) {
                state.list_state.cursor = index;
            }
            state.focus = Focus::FriendList;
            select_and_focus(state, &id);
        }
        ClickTarget::ToggleAddFriend => {
            state.focus = Focus::AddFriendToggle;
            toggle_add_friend(state);
        }
        ClickTarget::SubmitAddFriend => {
            state.focus = Focus::AddFriend(AddFriendField::Submit);
            state.submit_add_friend();
        }
        ClickTarget::SubmitSplit => {
            state.focus = Focus::SplitBill(SplitBillField::Submit);
            state.submit_split();
        }
        ClickTarget::TogglePayer => {
            state.focus = Focus::SplitBill(SplitBillField::Payer);
            state.split_form.toggle_payer();
        }
        ClickTarget::Focus(focus) => state.focus = focus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(state, KeyCode::Char(ch));
        }
    }

    fn click(state: &mut AppState, column: u16, row: u16) {
        handle_mouse(
            state,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn keyboard_split_with_clark() {
        let mut s = state();
        press(&mut s, KeyCode::Enter); // select Clark (cursor row 0)
        assert_eq!(s.focus, Focus::SplitBill(SplitBillField::BillTotal));

        type_text(&mut s, "100");
        press(&mut s, KeyCode::Tab);
        type_text(&mut s, "40");
        assert_eq!(s.split_form.friend_paid(), Some(60));

        press(&mut s, KeyCode::Enter);
        assert_eq!(s.friends[0].balance, 53);
        assert!(s.selected.is_none());
        assert_eq!(s.focus, Focus::FriendList);
        assert_eq!(s.status_message.as_deref(), Some("Clark owes you 53"));
    }

    #[test]
    fn keyboard_split_paid_by_friend() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        type_text(&mut s, "100");
        press(&mut s, KeyCode::Tab);
        type_text(&mut s, "40");
        press(&mut s, KeyCode::Tab);
        press(&mut s, KeyCode::Right);
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.friends[0].balance, -47);
    }

    #[test]
    fn typing_more_than_the_bill_keeps_previous_expense() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        type_text(&mut s, "50");
        press(&mut s, KeyCode::Tab);
        type_text(&mut s, "49");
        type_text(&mut s, "0"); // would be 490
        assert_eq!(s.split_form.user_paid(), Some(49));

        press(&mut s, KeyCode::Backspace);
        type_text(&mut s, "x"); // not a number
        assert_eq!(s.split_form.user_paid(), Some(4));
    }

    #[test]
    fn keyboard_add_friend() {
        let mut s = state();
        press(&mut s, KeyCode::Char('a'));
        assert!(s.add_friend_open);
        assert_eq!(s.focus, Focus::AddFriend(AddFriendField::Name));

        // Empty name: nothing happens, form stays open.
        press(&mut s, KeyCode::Enter);
        assert!(s.add_friend_open);
        assert_eq!(s.friends.len(), 3);

        type_text(&mut s, "Bob");
        press(&mut s, KeyCode::Enter);
        assert!(!s.add_friend_open);
        assert_eq!(s.friends.len(), 4);
        assert_eq!(s.friends[3].name, "Bob");
        assert!(s.friends[3].image.starts_with("https://i.pravatar.cc/48?="));
        assert_eq!(s.focus, Focus::FriendList);
        assert_eq!(s.list_state.cursor, 3);
    }

    #[test]
    fn typing_q_in_a_form_does_not_quit() {
        let mut s = state();
        press(&mut s, KeyCode::Char('a'));
        type_text(&mut s, "q");
        assert!(!s.should_quit);
        assert_eq!(s.add_friend_form.name.text(), "q");

        press(&mut s, KeyCode::Esc);
        press(&mut s, KeyCode::Char('q'));
        assert!(s.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut s = state();
        press(&mut s, KeyCode::Char('a'));
        handle_key(
            &mut s,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(s.should_quit);
    }

    #[test]
    fn help_overlay_opens_and_closes() {
        let mut s = state();
        press(&mut s, KeyCode::Char('?'));
        assert_eq!(s.active_view, ActiveView::Help);
        press(&mut s, KeyCode::Char('j'));
        assert_eq!(s.list_state.cursor, 0);
        press(&mut s, KeyCode::Esc);
        assert_eq!(s.active_view, ActiveView::Main);
    }

    #[test]
    fn clicking_select_buttons_toggles_selection() {
        let mut s = state();
        let sarah = s.friends[1].id.clone();
        let anthony = s.friends[2].id.clone();
        s.hit_zones.push(
            ratatui::layout::Rect::new(10, 4, 10, 1),
            ClickTarget::SelectFriend(sarah.clone()),
        );
        s.hit_zones.push(
            ratatui::layout::Rect::new(10, 7, 10, 1),
            ClickTarget::SelectFriend(anthony.clone()),
        );

        click(&mut s, 12, 4);
        assert!(s.is_selected(&sarah));
        assert_eq!(s.list_state.cursor, 1);

        click(&mut s, 12, 7);
        assert!(s.is_selected(&anthony));

        click(&mut s, 12, 7);
        assert!(s.selected.is_none());
        assert_eq!(s.focus, Focus::FriendList);
    }

    #[test]
    fn clicking_outside_any_zone_does_nothing() {
        let mut s = state();
        click(&mut s, 50, 50);
        assert!(s.selected.is_none());
        assert!(!s.add_friend_open);
    }
}
