//! Add-friend form panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::app::state::{AddFriendField, Focus};
use crate::core::forms::AddFriendForm;

use super::button::{Button, ClickTarget, HitZones};
use super::field::{render_field, FieldValue};
use super::theme::Theme;

pub struct AddFriendPanel<'a> {
    pub form: &'a AddFriendForm,
    pub focus: Focus,
}

impl AddFriendPanel<'_> {
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer, zones: &mut HitZones) {
        if area.height == 0 {
            return;
        }
        Clear.render(area, buf);

        let focused_field = match self.focus {
            Focus::AddFriend(field) => Some(field),
            _ => None,
        };
        let block = Block::default()
            .title(" Add friend ")
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused_field.is_some() {
                Theme::focused_border_style()
            } else {
                Theme::border_style()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        let row = |dy: u16, h: u16| Rect {
            y: inner.y + dy,
            height: h.min(inner.height.saturating_sub(dy)),
            ..inner
        };

        let name = AddFriendField::Name;
        render_field(
            row(0, 2),
            buf,
            zones,
            "Friend name",
            FieldValue::Editable(&self.form.name),
            focused_field == Some(name),
            Some(ClickTarget::Focus(Focus::AddFriend(name))),
        );
        let image = AddFriendField::ImageUrl;
        render_field(
            row(2, 2),
            buf,
            zones,
            "Image URL",
            FieldValue::Editable(&self.form.image_url),
            focused_field == Some(image),
            Some(ClickTarget::Focus(Focus::AddFriend(image))),
        );

        if inner.height > 5 {
            Button::new("Add")
                .focused(focused_field == Some(AddFriendField::Submit))
                .render_and_hit(row(5, 1), buf, zones, ClickTarget::SubmitAddFriend);
        }
    }
}
