//! Split-bill form panel, shown for the selected friend.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::app::state::{Focus, SplitBillField};
use crate::core::forms::{AmountField, Payer, SplitBillForm};
use crate::core::friend::Friend;

use super::button::{Button, ClickTarget, HitZones};
use super::field::{render_field, FieldValue};
use super::theme::Theme;

pub struct SplitBillPanel<'a> {
    /// `None` renders an empty pane with a hint instead of the form.
    pub friend: Option<&'a Friend>,
    pub form: &'a SplitBillForm,
    pub focus: Focus,
}

impl SplitBillPanel<'_> {
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer, zones: &mut HitZones) {
        let Some(friend) = self.friend else {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border_style());
            Paragraph::new(Line::styled(
                "Select a friend to split a bill.",
                Theme::label_style(),
            ))
            .block(block)
            .render(area, buf);
            return;
        };

        let focused_field = match self.focus {
            Focus::SplitBill(field) => Some(field),
            _ => None,
        };
        let block = Block::default()
            .title(format!(" Split a bill with {} ", friend.name))
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
        let is_focused = |field: SplitBillField| focused_field == Some(field);
        let focus_target = |field: SplitBillField| Some(ClickTarget::Focus(Focus::SplitBill(field)));

        render_field(
            row(0, 2),
            buf,
            zones,
            "Bill value",
            FieldValue::Editable(self.form.input(AmountField::BillTotal)),
            is_focused(SplitBillField::BillTotal),
            focus_target(SplitBillField::BillTotal),
        );
        render_field(
            row(2, 2),
            buf,
            zones,
            "Your expense",
            FieldValue::Editable(self.form.input(AmountField::UserPaid)),
            is_focused(SplitBillField::UserPaid),
            focus_target(SplitBillField::UserPaid),
        );
        render_field(
            row(4, 2),
            buf,
            zones,
            &format!("{}'s expense", friend.name),
            FieldValue::ReadOnly(
                self.form
                    .friend_paid()
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            ),
            false,
            None,
        );
        let payer = match self.form.payer {
            Payer::User => "You",
            Payer::Friend => friend.name.as_str(),
        };
        render_field(
            row(6, 2),
            buf,
            zones,
            "Who is paying the bill?",
            FieldValue::Choice(payer),
            is_focused(SplitBillField::Payer),
            Some(ClickTarget::TogglePayer),
        );

        if inner.height > 9 {
            Button::new("Split bill")
                .focused(is_focused(SplitBillField::Submit))
                .render_and_hit(row(9, 1), buf, zones, ClickTarget::SubmitSplit);
        }
    }
}
