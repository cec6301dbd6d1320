use crate::app::App;
use crate::display::{MealView, PageId, Region};
use crate::ui::colors::ColorPalette;
use crate::ui::sidebar::scroll_for;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect, palette: &ColorPalette) {
    // Focus moves to the sidebar while it is open
    let active = !app.surface.sidebar_open;

    match app.surface.current_page() {
        Some(PageId::Home) => {
            render_region(f, area, "Categories", &app.surface.categories, active, palette)
        }
        Some(PageId::SearchResults) => {
            let title = results_title(&app.surface.results_query);
            render_region(f, area, &title, &app.surface.results, active, palette)
        }
        Some(PageId::Category) => render_category(f, app, area, active, palette),
        Some(PageId::MealDetail) => render_meal(f, app, area, palette),
        None => f.render_widget(
            Paragraph::new("Loading...")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        ),
    }
}

fn results_title(query: &str) -> String {
    format!("Results for \"{}\"", query)
}

pub fn unit_lines(region: &Region, active: bool, palette: &ColorPalette) -> Vec<Line<'static>> {
    if let Some(message) = region.message() {
        return vec![Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Gray),
        ))];
    }

    region
        .units()
        .iter()
        .enumerate()
        .map(|(idx, unit)| {
            let is_selected = active && idx == region.cursor();
            let prefix = if is_selected { "> " } else { "  " };
            let label_style = if is_selected {
                Style::default()
                    .fg(palette.selected_fg)
                    .bg(palette.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut spans = vec![Span::styled(format!("{prefix}{}", unit.label), label_style)];
            if let Some(caption) = unit.caption.as_deref().filter(|c| !c.is_empty()) {
                spans.push(Span::styled(
                    format!("  {}", caption),
                    Style::default().fg(palette.muted),
                ));
            }
            // Image link for the card under the cursor
            if let Some(image) = unit.image.as_deref().filter(|_| is_selected) {
                spans.push(Span::styled(
                    format!("  [{}]", image),
                    Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_region(
    f: &mut Frame,
    area: Rect,
    title: &str,
    region: &Region,
    active: bool,
    palette: &ColorPalette,
) {
    f.render_widget(
        Paragraph::new(unit_lines(region, active, palette))
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .scroll((scroll_for(region.cursor(), area.height), 0)),
        area,
    );
}

fn render_category(f: &mut Frame, app: &App, area: Rect, active: bool, palette: &ColorPalette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let info = &app.surface.category_info;
    let text = vec![
        Line::from(Span::styled(
            info.name.clone(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(info.description.clone()),
    ];
    f.render_widget(
        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Category"))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    render_region(
        f,
        chunks[1],
        "Meals",
        &app.surface.category_meals,
        active,
        palette,
    );
}

fn heading(text: &str, palette: &ColorPalette) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn meal_lines(meal: &MealView, palette: &ColorPalette) -> Vec<Line<'static>> {
    let mut text = vec![
        Line::from(Span::styled(
            meal.title.clone(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let mut category = vec![
        Span::styled("Category: ", Style::default().fg(Color::Gray)),
        Span::raw(meal.category.clone()),
    ];
    if !meal.area.is_empty() {
        category.push(Span::styled(
            format!("  ({})", meal.area),
            Style::default().fg(palette.muted),
        ));
    }
    text.push(Line::from(category));
    if let Some(source) = &meal.source {
        text.push(Line::from(vec![
            Span::styled("Source: ", Style::default().fg(Color::Gray)),
            Span::styled(
                source.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    if !meal.tags.is_empty() {
        text.push(Line::from(vec![
            Span::styled("Tags: ", Style::default().fg(Color::Gray)),
            Span::raw(meal.tags.join(", ")),
        ]));
    }
    if !meal.image.is_empty() {
        text.push(Line::from(vec![
            Span::styled("Image: ", Style::default().fg(Color::Gray)),
            Span::styled(meal.image.clone(), Style::default().fg(palette.muted)),
        ]));
    }

    text.push(Line::from(""));
    text.push(heading("Ingredients", palette));
    text.push(Line::from(meal.ingredients.join("   ")));

    text.push(Line::from(""));
    text.push(heading("Measures", palette));
    let left_width = meal
        .measures_left
        .iter()
        .map(|m| m.chars().count())
        .max()
        .unwrap_or(0)
        + 4;
    for (idx, left) in meal.measures_left.iter().enumerate() {
        let right = meal.measures_right.get(idx).map(String::as_str).unwrap_or("");
        text.push(Line::from(format!(
            "• {:<width$}{}",
            left,
            if right.is_empty() {
                String::new()
            } else {
                format!("• {}", right)
            },
            width = left_width
        )));
    }

    text.push(Line::from(""));
    text.push(heading("Instructions", palette));
    match &meal.instructions_message {
        Some(message) => text.push(Line::from(message.clone())),
        None => {
            for (idx, step) in meal.steps.iter().enumerate() {
                text.push(Line::from(Span::styled(
                    format!("Step {}", idx + 1),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                text.push(Line::from(Span::styled(
                    step.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
    }
    text
}

fn render_meal(f: &mut Frame, app: &App, area: Rect, palette: &ColorPalette) {
    f.render_widget(
        Paragraph::new(meal_lines(&app.surface.meal, palette))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(app.surface.breadcrumb.clone()),
            )
            .wrap(Wrap { trim: false })
            .scroll((app.meal_scroll, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::meal;
    use crate::render::render_meal_detail;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn results_title_follows_submitted_query_not_draft() {
        let mut app = App::new("#/");
        app.show_search_results("pie", &[]);
        app.focus = crate::app::Focus::Search;
        app.search_input.push_str("x");
        assert_eq!(results_title(&app.surface.results_query), "Results for \"pie\"");
    }

    #[test]
    fn selected_card_shows_its_image() {
        let mut region = Region::default();
        crate::render::render_meal_grid(
            &mut region,
            &[
                summary_with_thumb("1", "Pie", "pie.jpg"),
                summary_with_thumb("2", "Stew", "stew.jpg"),
            ],
            "",
        );
        let lines = plain(&unit_lines(&region, true, &ColorPalette::kitchen()));
        assert!(lines[0].ends_with("[pie.jpg]"));
        assert!(!lines[1].contains("stew.jpg"));

        let inactive = plain(&unit_lines(&region, false, &ColorPalette::kitchen()));
        assert!(!inactive[0].contains("pie.jpg"));
    }

    fn summary_with_thumb(id: &str, name: &str, thumb: &str) -> crate::models::MealSummary {
        crate::models::MealSummary {
            thumbnail: Some(thumb.to_string()),
            ..crate::api::testing::summary(id, name, None)
        }
    }

    #[test]
    fn meal_lines_number_steps_and_pair_measures() {
        let mut view = MealView::default();
        render_meal_detail(&mut view, &meal("1", "Penne"));
        let lines = plain(&meal_lines(&view, &ColorPalette::kitchen()));

        assert!(lines.contains(&"Step 4".to_string()));
        assert!(lines.contains(&"Serve hot".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("• 200g Penne") && l.ends_with("• Salt")));
        assert!(!lines.iter().any(|l| l.starts_with("Source: ")));
    }
}
