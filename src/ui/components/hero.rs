use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::content::HeroSlide;
use crate::ui::theme::Theme;

pub struct Hero<'a> {
    pub slides: &'a [HeroSlide],
    pub cursor: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.panel_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(slide) = self.slides.get(self.cursor) else {
            return;
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("  {} ", slide.category),
                    Style::default().fg(colors.accent()),
                ),
                Span::styled(
                    format!(" \u{2605} {}", slide.rating),
                    Style::default().fg(colors.rating()),
                ),
            ]),
            Line::from(Span::styled(
                format!("  {}", slide.title),
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {}", slide.description),
                Style::default().fg(colors.text_dim()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                if self.focused {
                    "  [Enter] Play   [\u{2190}/\u{2192}] Browse"
                } else {
                    ""
                },
                Style::default().fg(colors.text_dim()),
            )),
        ];

        // Slide indicators, current one filled.
        let dots: Vec<Span> = (0..self.slides.len())
            .flat_map(|i| {
                let dot = if i == self.cursor { "\u{25cf}" } else { "\u{25cb}" };
                let color = if i == self.cursor {
                    colors.fg()
                } else {
                    colors.text_dim()
                };
                [
                    Span::styled(dot, Style::default().fg(color)),
                    Span::raw(" "),
                ]
            })
            .collect();
        let mut indicator = vec![Span::raw("  ")];
        indicator.extend(dots);
        lines.push(Line::from(""));
        lines.push(Line::from(indicator));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
