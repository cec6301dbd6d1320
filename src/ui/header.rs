use crate::app::{App, Focus};
use crate::ui::colors::ColorPalette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect, palette: &ColorPalette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(area);

    let logo = Line::from(vec![
        Span::styled("≡ ", Style::default().fg(palette.accent)),
        Span::styled(
            "Meal Finder",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(
        Paragraph::new(logo).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let searching = app.focus == Focus::Search;
    let (text, style) = if searching {
        (
            format!("{}_", app.search_input),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )
    } else if app.search_input.is_empty() {
        (
            "Search for a meal...".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.search_input.clone(), Style::default().fg(Color::White))
    };

    let border = if searching {
        Style::default().fg(palette.primary)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Search"),
        ),
        chunks[1],
    );
}
