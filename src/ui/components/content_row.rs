use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::ContentItem;
use crate::ui::layout::tile_row;
use crate::ui::theme::Theme;

pub struct ContentRow<'a> {
    pub title: &'a str,
    pub items: &'a [ContentItem],
    pub cursor: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for ContentRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let title_area = Rect { height: 1, ..area };
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", self.title),
            Style::default()
                .fg(colors.fg())
                .add_modifier(Modifier::BOLD),
        )))
        .render(title_area, buf);

        let cards_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };

        for (i, (item, card)) in self
            .items
            .iter()
            .zip(tile_row(cards_area, self.items.len()))
            .enumerate()
        {
            let is_cursor = self.focused && i == self.cursor;
            let border = if is_cursor {
                colors.border_focused()
            } else {
                colors.border()
            };
            let block = Block::bordered()
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(colors.panel_bg()));
            let inner = block.inner(card);
            block.render(card, buf);

            let title_style = if is_cursor {
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            let lines = vec![
                Line::from(Span::styled(item.title.as_str(), title_style)),
                Line::from(Span::styled(
                    item.category.as_str(),
                    Style::default().fg(colors.text_dim()),
                )),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(inner, buf);
        }
    }
}
