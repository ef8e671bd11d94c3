//! sliderkit-tui — terminal host for the center-zero slider.
//!
//! Renders the widget's display list on a braille canvas and feeds it mouse
//! events as pointer down/move/up. Terminal focus loss during a drag maps to
//! pointer-cancel.

mod app;
mod input;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let mut app = AppState::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    // Repaint when the slider marks itself dirty or the chrome changes.
    let mut chrome_dirty = true;

    loop {
        if app.slider.take_needs_redraw() || chrome_dirty {
            terminal.draw(|f| ui::draw(f, app))?;
            chrome_dirty = false;
        }

        // Poll for input events (50ms timeout for ~20 FPS tick).
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    input::handle_key(app, key);
                    chrome_dirty = true;
                }
                Event::Mouse(ev) => input::handle_mouse(app, ev),
                Event::FocusLost => input::handle_focus_lost(app),
                Event::Resize(_, _) => chrome_dirty = true,
                _ => {}
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
