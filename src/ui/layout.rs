use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical stack of the home screen: nav bar on top, hero carousel,
/// app grid, content row, one-line footer. Mirrors the region order so
/// focus always moves to the visually adjacent section.
pub struct HomeLayout {
    pub nav_bar: Rect,
    pub hero: Rect,
    pub app_grid: Rect,
    pub content_row: Rect,
    pub footer: Rect,
}

impl HomeLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            nav_bar: vertical[0],
            hero: vertical[1],
            app_grid: vertical[2],
            content_row: vertical[3],
            footer: vertical[4],
        }
    }
}

/// Evenly split a row area into `count` tiles with a one-cell gap.
pub fn tile_row(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area)
        .to_vec()
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 44;
    const MIN_POPUP_HEIGHT: u16 = 14;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
