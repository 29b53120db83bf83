//! Help overlay listing every action and its keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::config::{Action, AppConfig};

use super::layout::centered_fixed;

/// Fixed keys that are not configurable, shown below the action list.
const FORM_KEYS: &[(&str, &str)] = &[
    ("Next / previous field", "Tab/Shift+Tab"),
    ("Submit form", "Enter"),
    ("Change payer", "Space/←/→"),
    ("Back to friend list", "Esc"),
    ("Quit from anywhere", "Ctrl+c"),
];

/// Read-only controls popup.
pub struct HelpPopup<'a> {
    pub config: &'a AppConfig,
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // actions + blank + form keys + blank + hint + 2 blanks + 2 border
        let height = (Action::ALL.len() + FORM_KEYS.len()) as u16 + 7;
        let popup = centered_fixed(52, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Controls ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let label_style = Style::default().fg(Color::White);
        let key_style = Style::default().fg(Color::Yellow);
        let dim = Style::default().fg(Color::DarkGray);

        // Fixed-width columns: label left-aligned, keys right-aligned.
        let row = |label: &str, keys: String| {
            let label_col = format!("   {label:<24}");
            let keys_width = (inner.width as usize).saturating_sub(label_col.len()).max(1);
            Line::from(vec![
                Span::styled(label_col, label_style),
                Span::styled(format!("{keys:>keys_width$} "), key_style),
            ])
        };

        let mut lines = vec![Line::raw("")];
        for &action in Action::ALL {
            lines.push(row(action.label(), self.config.display_bindings(action)));
        }
        lines.push(Line::raw(""));
        for &(label, keys) in FORM_KEYS {
            lines.push(row(label, keys.to_string()));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("  Esc/?: close", dim)));

        Paragraph::new(lines).render(inner, buf);
    }
}
