use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::assistant::AssistantOverlay;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

/// Full-screen assistant overlay: dimmed backdrop plus a centered panel.
/// Rendered last so it sits above every region.
pub struct AssistantPanel<'a> {
    pub overlay: &'a AssistantOverlay,
    pub theme: &'a Theme,
}

impl Widget for AssistantPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let panel_area = centered_rect(40, 50, area);
        Clear.render(panel_area, buf);

        let block = Block::bordered()
            .title(" Assistant ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.panel_bg()));
        let inner = block.inner(panel_area);
        block.render(panel_area, buf);

        let recording = self.overlay.is_recording();
        let mic = if recording {
            Line::from(Span::styled(
                "\u{25a0} \u{25a0} \u{25a0}",
                Style::default()
                    .fg(colors.recording())
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                "\u{1f399}",
                Style::default().fg(colors.accent()),
            ))
        };

        // Error text displays in place of status until the next idle action.
        let status_line = match self.overlay.error() {
            Some(error) => Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(colors.error()),
            )),
            None => Line::from(Span::styled(
                self.overlay.status().to_string(),
                Style::default().fg(colors.fg()),
            )),
        };

        let hint = if recording {
            "[Enter] Stop   [Esc] Close"
        } else {
            "[Enter] Talk   [r] Reset   [Esc] Close"
        };

        let lines = vec![
            Line::from(""),
            mic,
            Line::from(""),
            status_line,
            Line::from(""),
            Line::from(Span::styled(hint, Style::default().fg(colors.text_dim()))),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
