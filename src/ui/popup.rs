use crate::app::{App, Focus};
use crate::ui::colors::ColorPalette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, palette: &ColorPalette) {
    let area = f.size();

    if let Some(notice) = &app.notice {
        render_notice_popup(f, area, notice, palette);
    } else if app.focus == Focus::Address {
        render_address_popup(f, area, &app.address_input, palette);
    } else if app.loading {
        render_loading_popup(f, area, palette);
    }
}

fn create_centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn create_popup_block(title: &str, primary_color: Color) -> Block {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(primary_color))
        .title(title)
        .title_style(
            Style::default()
                .fg(primary_color)
                .add_modifier(Modifier::BOLD),
        )
}

fn render_loading_popup(f: &mut Frame, area: Rect, palette: &ColorPalette) {
    let popup_area = create_centered_popup(area, 30, 3);
    let block = create_popup_block(" Loading ", palette.primary);
    let inner = block.inner(popup_area);

    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);
    f.render_widget(
        Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White)),
        inner,
    );
}

fn render_notice_popup(f: &mut Frame, area: Rect, notice: &str, palette: &ColorPalette) {
    let popup_area = create_centered_popup(area, 40, 6);
    let block = create_popup_block(" Notice ", palette.error);
    let inner = block.inner(popup_area);

    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                notice.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue",
                Style::default().fg(palette.muted),
            )),
        ])
        .alignment(Alignment::Center),
        inner,
    );
}

fn render_address_popup(f: &mut Frame, area: Rect, input_text: &str, palette: &ColorPalette) {
    let popup_area = create_centered_popup(area, 60, 7);
    let block = create_popup_block(" Go to ", palette.primary);
    let inner = block.inner(popup_area);

    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{}_", input_text),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("e.g. ", Style::default().fg(Color::White)),
                Span::styled(
                    "#/category/Seafood",
                    Style::default().fg(palette.accent),
                ),
                Span::styled(" or ", Style::default().fg(Color::White)),
                Span::styled("#/meal/52772", Style::default().fg(palette.accent)),
            ]),
        ])
        .alignment(Alignment::Left),
        inner,
    );
}
