mod api;
mod app;
mod config;
mod display;
mod events;
mod logging;
mod models;
mod render;
mod route;
mod router;
mod store;
mod ui;

use anyhow::Result;
use api::{MealDbClient, RecipeSource};
use app::App;
use config::Config;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use events::{handle_key_event, EventAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load();
    logging::init_tracing(&config)?;
    info!(api_base = %config.api_base, route = %config.route, "starting");

    let source: Arc<dyn RecipeSource> = Arc::new(MealDbClient::new(config.api_base.clone()));
    let app = Arc::new(Mutex::new(App::new(&config.route)));

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run(&mut terminal, app, source).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    source: Arc<dyn RecipeSource>,
) -> Result<()> {
    {
        let app = app.clone();
        let source = source.clone();
        tokio::spawn(async move {
            router::start(&app, source.as_ref()).await;
        });
    }

    loop {
        {
            let app_lock = app.lock().await;
            terminal.draw(|f| ui::render(f, &app_lock))?;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = {
                    let mut app_lock = app.lock().await;
                    handle_key_event(&mut app_lock, key)
                };
                match action {
                    EventAction::Navigate(route) => {
                        router::spawn_navigation(app.clone(), source.clone(), route)
                    }
                    EventAction::Quit => break,
                    EventAction::None => {}
                }
            }
        } else {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    info!("quitting");
    Ok(())
}
