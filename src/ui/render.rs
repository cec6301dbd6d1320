use crate::app::App;
use crate::ui::colors::ColorPalette;
use crate::ui::{footer, header, pages, popup, sidebar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let palette = ColorPalette::kitchen();

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    header::render(f, app, vertical_chunks[0], &palette);
    pages::render(f, app, vertical_chunks[1], &palette);
    footer::render(f, app, vertical_chunks[2], &palette);

    // Sidebar slides over the left edge of the page body
    if app.surface.sidebar_open {
        let body = vertical_chunks[1];
        let width = body.width.min(32);
        let area = ratatui::layout::Rect::new(body.x, body.y, width, body.height);
        sidebar::render(f, app, area, &palette);
    }

    popup::render(f, app, &palette);
}
