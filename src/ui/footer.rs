use crate::app::{App, Focus};
use crate::display::PageId;
use crate::ui::colors::ColorPalette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect, palette: &ColorPalette) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(palette.accent));

    let spans = match app.focus {
        Focus::Search => vec![
            Span::raw("Type to search | "),
            key("Enter"),
            Span::raw("=search | "),
            key("Esc"),
            Span::raw("=cancel"),
        ],
        Focus::Address => vec![
            Span::raw("Go to fragment | "),
            key("Enter"),
            Span::raw("=go | "),
            key("Esc"),
            Span::raw("=cancel"),
        ],
        Focus::Browse => {
            let mut spans = vec![
                Span::raw("Commands: "),
                key("↑/↓"),
                Span::raw("=select "),
                key("Enter"),
                Span::raw("=open | "),
                key("/"),
                Span::raw("=search | "),
                key("m"),
                Span::raw("=menu | "),
                key("h"),
                Span::raw("=home "),
            ];
            if app.location.can_go_back() {
                spans.push(Span::raw("| "));
                spans.push(key("b"));
                spans.push(Span::raw("=back "));
            }
            if app.surface.is_visible(PageId::MealDetail) {
                spans.push(Span::raw("| "));
                spans.push(key("PgUp/PgDn"));
                spans.push(Span::raw("=scroll "));
            }
            spans.push(Span::raw("| "));
            spans.push(key("g"));
            spans.push(Span::raw("=go to "));
            spans.push(Span::raw("| "));
            spans.push(Span::styled("q", Style::default().fg(palette.error)));
            spans.push(Span::raw("=quit"));
            spans
        }
    };

    f.render_widget(
        Paragraph::new(vec![Line::from(spans)])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(app.location.current().to_string()),
            )
            .alignment(ratatui::layout::Alignment::Center),
        area,
    );
}
