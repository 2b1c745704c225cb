use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::ASSISTANT_LABEL;
use crate::ui::theme::Theme;

pub struct NavBar<'a> {
    pub tabs: &'a [String],
    pub active_tab: usize,
    pub cursor: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let bar = Block::default().style(Style::default().bg(colors.header_bg()));
        bar.render(area, buf);

        let mut spans: Vec<Span> = vec![Span::styled(
            " lounge ",
            Style::default()
                .fg(colors.accent())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        )];

        for (i, label) in self.tabs.iter().enumerate() {
            spans.push(Span::raw("  "));
            spans.push(self.tab_span(i, label));
        }

        // The assistant slot renders after the tabs, flush with them; its
        // index is one past the last tab.
        spans.push(Span::raw("   "));
        spans.push(self.tab_span(self.tabs.len(), ASSISTANT_LABEL));

        let line = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(colors.header_bg()));
        let inner = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        line.render(inner, buf);
    }
}

impl NavBar<'_> {
    fn tab_span<'s>(&self, index: usize, label: &'s str) -> Span<'s> {
        let colors = &self.theme.colors;
        let is_cursor = self.focused && index == self.cursor;
        let is_active = index == self.active_tab && index < self.tabs.len();

        let mut style = Style::default().bg(colors.header_bg());
        style = if is_cursor {
            style.fg(colors.focus_fg()).bg(colors.focus_bg())
        } else if is_active {
            style.fg(colors.tab_active()).add_modifier(Modifier::BOLD)
        } else {
            style.fg(colors.text_dim())
        };
        if is_active {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        Span::styled(format!(" {label} "), style)
    }
}
