//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).
//! The friend list, the selection and the add-friend visibility flag are only
//! ever changed through the operations on [`AppState`].

use crate::config::AppConfig;
use crate::core::{
    forms::{AddFriendForm, SplitBillForm},
    friend::{seed_friends, Friend, FriendId},
};
use crate::ui::button::HitZones;
use crate::ui::friend_list::FriendListState;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Main,
    Help,
}

/// Inputs of the add-friend form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddFriendField {
    Name,
    ImageUrl,
    Submit,
}

/// Inputs of the split-bill form, in tab order.  The friend's expense is
/// read-only and never takes focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitBillField {
    BillTotal,
    UserPaid,
    Payer,
    Submit,
}

/// What receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    FriendList,
    AddFriend(AddFriendField),
    AddFriendToggle,
    SplitBill(SplitBillField),
}

/// Top-level application state.
pub struct AppState {
    /// All friends, in insertion order.
    pub friends: Vec<Friend>,
    /// The friend targeted by the split-bill form.
    pub selected: Option<FriendId>,
    /// Whether the add-friend form is shown.
    pub add_friend_open: bool,
    /// Add-friend inputs; reset whenever the form is shown or hidden.
    pub add_friend_form: AddFriendForm,
    /// Split-bill inputs; reset whenever the selection changes.
    pub split_form: SplitBillForm,
    /// Keyboard cursor and scroll offset of the friend list.
    pub list_state: FriendListState,
    /// What receives keyboard input.
    pub focus: Focus,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// User-configurable keybindings.
    pub config: AppConfig,
    /// Clickable regions from the last drawn frame.
    pub hit_zones: HitZones,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_friends(seed_friends(), config)
    }

    pub fn with_friends(friends: Vec<Friend>, config: AppConfig) -> Self {
        Self {
            friends,
            selected: None,
            add_friend_open: false,
            add_friend_form: AddFriendForm::default(),
            split_form: SplitBillForm::default(),
            list_state: FriendListState::default(),
            focus: Focus::default(),
            active_view: ActiveView::default(),
            config,
            hit_zones: HitZones::default(),
            status_message: None,
            should_quit: false,
        }
    }

    // ── friend-list operations ─────────────────────────────────

    /// Show the add-friend form if hidden, hide it if shown.
    pub fn toggle_add_friend_form(&mut self) {
        self.set_add_friend_open(!self.add_friend_open);
    }

    /// Append `friend` to the list and close the add-friend form.
    pub fn add_friend(&mut self, friend: Friend) {
        tracing::info!(id = %friend.id, name = %friend.name, "friend added");
        self.status_message = Some(format!("Added {}", friend.name));
        self.friends.push(friend);
        self.list_state.cursor = self.friends.len() - 1;
        self.set_add_friend_open(false);
    }

    /// Select `id`, or clear the selection if `id` is already selected.
    /// Always hides the add-friend form.
    pub fn select_friend(&mut self, id: &FriendId) {
        let next = if self.selected.as_ref() == Some(id) {
            None
        } else {
            Some(id.clone())
        };
        if next != self.selected {
            self.split_form = SplitBillForm::default();
        }
        tracing::debug!(selected = ?next, "selection changed");
        self.selected = next;
        self.set_add_friend_open(false);
    }

    /// Add `delta` to the selected friend's balance and clear the selection.
    pub fn apply_split(&mut self, delta: i64) {
        let Some(id) = self.selected.clone() else {
            tracing::warn!(delta, "split submitted without a selected friend");
            return;
        };
        match self.friends.iter_mut().find(|f| f.id == id) {
            Some(friend) => {
                friend.balance = friend.balance.saturating_add(delta);
                tracing::info!(id = %friend.id, delta, balance = friend.balance, "split applied");
                self.status_message = Some(friend.status_message());
            }
            None => tracing::warn!(%id, "selected friend is not in the list"),
        }
        self.selected = None;
        self.split_form = SplitBillForm::default();
        self.fix_focus();
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        let id = self.selected.as_ref()?;
        self.friends.iter().find(|f| &f.id == id)
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Friend under the list cursor.
    pub fn cursor_friend(&self) -> Option<&Friend> {
        self.friends.get(self.list_state.cursor)
    }

    // ── form submission ────────────────────────────────────────

    /// Submit the add-friend form; a form with a missing field stays open
    /// unchanged.
    pub fn submit_add_friend(&mut self) {
        match self.add_friend_form.submit() {
            Some(friend) => self.add_friend(friend),
            None => tracing::debug!("add-friend form incomplete, ignoring submit"),
        }
    }

    /// Submit the split-bill form; an incomplete form is ignored.
    pub fn submit_split(&mut self) {
        match self.split_form.submit() {
            Some(delta) => self.apply_split(delta),
            None => tracing::debug!("split-bill form incomplete, ignoring submit"),
        }
    }

    // ── focus ──────────────────────────────────────────────────

    /// Focus targets of everything currently visible, in tab order.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::FriendList];
        if self.add_friend_open {
            order.extend(
                [AddFriendField::Name, AddFriendField::ImageUrl, AddFriendField::Submit]
                    .map(Focus::AddFriend),
            );
        }
        order.push(Focus::AddFriendToggle);
        if self.selected.is_some() {
            order.extend(
                [
                    SplitBillField::BillTotal,
                    SplitBillField::UserPaid,
                    SplitBillField::Payer,
                    SplitBillField::Submit,
                ]
                .map(Focus::SplitBill),
            );
        }
        order
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.cycle_focus(-1);
    }

    fn cycle_focus(&mut self, step: isize) {
        let order = self.focus_order();
        let len = order.len() as isize;
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        self.focus = order[(pos + step).rem_euclid(len) as usize];
    }

    /// Move focus back to the list if it points into a hidden form.
    fn fix_focus(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            self.focus = Focus::FriendList;
        }
    }

    fn set_add_friend_open(&mut self, open: bool) {
        self.add_friend_open = open;
        self.add_friend_form = AddFriendForm::default();
        self.fix_focus();
    }
}
