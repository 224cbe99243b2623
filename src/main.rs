//! mailscope - Terminal viewer for the Saf-gard email campaign report
//!
//! Renders the 2024-2025 campaign metrics analysis as a scrollable
//! document with a scroll-spy section highlight, a slide-in navigation
//! panel and animated jumps between sections.

mod app;
mod chart;
mod layout;
mod navigator;
mod panel;
mod report;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use app::App;

/// Frame rate for animations (approximately 30 FPS)
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Main entry point
fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install().ok();

    run_tui()
}

/// Run the TUI application
fn run_tui() -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create application state
    let mut app = App::new();

    // Main event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Run the main event loop
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Advance animations and geometry for this frame
        let size = terminal.size()?;
        app.tick(size.width, size.height);

        // Render the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle input events with timeout for animation
        if event::poll(FRAME_DURATION)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events (not release)
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key);
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
