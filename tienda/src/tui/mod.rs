//! Terminal UI
//!
//! One screen: the product form on top, the product table below, and a log
//! pane at the bottom. Everything runs on the calling thread.

pub mod app;
pub mod dialog;
pub mod form;
pub mod table;
pub mod ui;

pub use app::{App, EditorState};
pub use dialog::{ConfirmAction, Dialog, DialogKind};
pub use form::{Button, Focus, FormField};
pub use table::ProductRow;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::core::Config;
use crate::db::{JsonFileStore, ProductRepository, ProductStore};

pub const WINDOW_TITLE: &str = "Gestión de Productos - Tienda";

/// Input poll interval; also the log pane refresh rate
const TICK_RATE: Duration = Duration::from_millis(100);

/// Open the store named in `config` and run the editor until the user quits
pub fn run(config: &Config) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&config.data_file);
    let mut app = App::new(ProductRepository::new(store));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("Tienda closed");
    res.map_err(Into::into)
}

fn run_app<B: Backend, S: ProductStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key);
        }
    }
    Ok(())
}
