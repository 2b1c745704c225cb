use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::AppEntry;
use crate::ui::layout::tile_row;
use crate::ui::theme::Theme;

pub struct AppGrid<'a> {
    pub apps: &'a [AppEntry],
    pub cursor: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for AppGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let title_area = Rect { height: 1, ..area };
        Paragraph::new(Line::from(Span::styled(
            " Apps",
            Style::default()
                .fg(colors.fg())
                .add_modifier(Modifier::BOLD),
        )))
        .render(title_area, buf);

        let tiles_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };

        for (i, (app, tile)) in self
            .apps
            .iter()
            .zip(tile_row(tiles_area, self.apps.len()))
            .enumerate()
        {
            let is_cursor = self.focused && i == self.cursor;
            let (border, fg) = if is_cursor {
                (colors.border_focused(), colors.fg())
            } else {
                (colors.border(), colors.text_dim())
            };
            let block = Block::bordered()
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(colors.panel_bg()));
            let inner = block.inner(tile);
            block.render(tile, buf);

            let style = if is_cursor {
                Style::default().fg(fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(fg)
            };
            Paragraph::new(Line::from(Span::styled(app.name.as_str(), style)))
                .alignment(Alignment::Center)
                .render(inner, buf);
        }
    }
}
