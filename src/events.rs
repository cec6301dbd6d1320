use crate::app::{App, Focus};
use crate::display::PageId;
use crate::route::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub enum EventAction {
    Navigate(Route),
    Quit,
    None,
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> EventAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return EventAction::Quit;
    }

    // the notice is modal: any key acknowledges it
    if app.notice.is_some() {
        app.dismiss_notice();
        return EventAction::None;
    }

    match app.focus {
        Focus::Search => handle_search_input(app, key.code),
        Focus::Address => handle_address_input(app, key.code),
        Focus::Browse => handle_browse(app, key.code),
    }
}

fn handle_search_input(app: &mut App, key_code: KeyCode) -> EventAction {
    match key_code {
        KeyCode::Enter => {
            let query = app.search_input.trim().to_string();
            if query.is_empty() {
                return EventAction::None;
            }
            app.focus = Focus::Browse;
            EventAction::Navigate(Route::Search(query))
        }
        KeyCode::Esc => {
            app.focus = Focus::Browse;
            EventAction::None
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            EventAction::None
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            EventAction::None
        }
        _ => EventAction::None,
    }
}

fn handle_address_input(app: &mut App, key_code: KeyCode) -> EventAction {
    match key_code {
        KeyCode::Enter => {
            app.focus = Focus::Browse;
            let fragment = std::mem::take(&mut app.address_input);
            debug!(%fragment, "address entered");
            EventAction::Navigate(Route::parse(&fragment))
        }
        KeyCode::Esc => {
            app.focus = Focus::Browse;
            app.address_input.clear();
            EventAction::None
        }
        KeyCode::Backspace => {
            app.address_input.pop();
            EventAction::None
        }
        KeyCode::Char(c) => {
            app.address_input.push(c);
            EventAction::None
        }
        _ => EventAction::None,
    }
}

fn handle_browse(app: &mut App, key_code: KeyCode) -> EventAction {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => EventAction::Quit,
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.toggle_sidebar();
            EventAction::None
        }
        KeyCode::Esc => {
            app.close_sidebar();
            EventAction::None
        }
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Home => {
            app.close_sidebar();
            EventAction::Navigate(Route::Home)
        }
        KeyCode::Char('/') => {
            app.close_sidebar();
            app.focus = Focus::Search;
            EventAction::None
        }
        KeyCode::Char('g') | KeyCode::Char('G') => {
            app.close_sidebar();
            app.address_input = app.location.current().to_string();
            app.focus = Focus::Address;
            EventAction::None
        }
        KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('B') => match app.location.back() {
            Some(route) => EventAction::Navigate(route),
            None => EventAction::None,
        },
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection(-1);
            EventAction::None
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            app.move_selection(1);
            EventAction::None
        }
        KeyCode::PageUp if app.surface.is_visible(PageId::MealDetail) => {
            app.scroll_meal(-10);
            EventAction::None
        }
        KeyCode::PageDown if app.surface.is_visible(PageId::MealDetail) => {
            app.scroll_meal(10);
            EventAction::None
        }
        KeyCode::Enter => {
            let target = app.selected_target();
            app.close_sidebar();
            target.map_or(EventAction::None, EventAction::Navigate)
        }
        _ => EventAction::None,
    }
}
