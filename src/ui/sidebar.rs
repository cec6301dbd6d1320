use crate::app::App;
use crate::ui::colors::ColorPalette;
use crate::ui::pages::unit_lines;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect, palette: &ColorPalette) {
    let region = &app.surface.sidebar;
    let lines = unit_lines(region, true, palette);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(ratatui::style::Style::default().fg(palette.accent))
                    .title(" Categories ")
                    .title_alignment(Alignment::Center),
            )
            .alignment(Alignment::Left)
            .scroll((scroll_for(region.cursor(), area.height), 0)),
        area,
    );
}

/// Keeps the cursor line inside a bordered area of `height` rows.
pub fn scroll_for(cursor: usize, height: u16) -> u16 {
    let visible = height.saturating_sub(2) as usize;
    if visible == 0 || cursor < visible {
        0
    } else {
        (cursor + 1 - visible) as u16
    }
}
