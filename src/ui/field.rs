//! Labelled single-line input, shared by both forms.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
};

use crate::core::text_field::TextField;

use super::button::{ClickTarget, HitZones};
use super::theme::Theme;

/// How an input row is drawn.
pub enum FieldValue<'a> {
    /// Editable text with a cursor.
    Editable(&'a TextField),
    /// Display-only value.
    ReadOnly(String),
    /// A two-option selector, shown as `‹ value ›`.
    Choice(&'a str),
}

/// Draw `label` on one line of `area` and the value on the next.  The value
/// line is registered for `target`.  When `focused` and editable, the
/// terminal cursor is placed in the input.
pub fn render_field(
    area: Rect,
    buf: &mut Buffer,
    zones: &mut HitZones,
    label: &str,
    value: FieldValue<'_>,
    focused: bool,
    target: Option<ClickTarget>,
) {
    if area.height < 2 {
        return;
    }
    buf.set_line(
        area.x,
        area.y,
        &Line::from(Span::styled(label.to_string(), Theme::label_style())),
        area.width,
    );

    let input = Rect::new(area.x, area.y + 1, area.width, 1);
    let style = match (&value, focused) {
        (FieldValue::ReadOnly(_), _) => Theme::readonly_style(),
        (_, true) => Theme::input_focused_style(),
        (_, false) => Theme::input_style(),
    };
    buf.set_style(input, style);

    let text = match &value {
        FieldValue::Editable(field) => field.text().to_string(),
        FieldValue::ReadOnly(text) => text.clone(),
        FieldValue::Choice(choice) => format!("‹ {choice} ›"),
    };
    buf.set_line(input.x + 1, input.y, &Line::raw(text), input.width.saturating_sub(1));

    if let (FieldValue::Editable(field), true) = (&value, focused) {
        let column = u16::try_from(field.cursor_column())
            .unwrap_or(u16::MAX)
            .saturating_add(1)
            .min(input.width.saturating_sub(1));
        zones.cursor = Some(Position::new(input.x + column, input.y));
    }
    if let Some(target) = target {
        zones.push(input, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_inside_input_for_long_text() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        let mut zones = HitZones::default();
        let field = TextField::with_text("9".repeat(70_000));

        render_field(area, &mut buf, &mut zones, "Bill value", FieldValue::Editable(&field), true, None);

        assert_eq!(zones.cursor, Some(Position::new(9, 1)));
    }
}
