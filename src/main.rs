//! jobhelper - Job Application Helper
//!
//! A terminal form that assembles a short cover letter from a name, a company,
//! skills, an optional statement of interest and a list of profile links,
//! previews it, and exports it as a PDF.

use std::io;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{info, warn};

use jobhelper::application::{App, AppMode};
use jobhelper::infrastructure::{init_logging, Args, Config};
use jobhelper::presentation::{render_ui, InputHandler};

/// Entry point for the jobhelper terminal application.
///
/// Resolves configuration, sets up logging and the terminal interface, and
/// runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, if terminal setup fails,
/// or if there are issues with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_args(Args::parse())?;

    if let Err(err) = init_logging(&config.log_file, &config.log_level) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!(language = %config.language, output_dir = %config.output_dir.display(), "starting jobhelper");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        warn!(error = %err, "terminal error");
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Handles terminal rendering and keyboard input processing.
/// Continues running until the user presses 'q' in normal mode.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if matches!(app.mode, AppMode::Normal) => {
                        info!("quit");
                        return Ok(());
                    }
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
