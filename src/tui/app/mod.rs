//! Terminal handling shared by full-screen apps.
//!
//! [`App`] owns the ratatui terminal and its raw-mode lifecycle.
//! [`TuiApp`] is the event loop an app plugs its key, mouse and tick
//! handling into.

pub mod modals;
pub mod overlay;
pub mod status_footer;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseEvent,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

/// Owns the terminal while a full-screen app runs.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    /// Enter raw mode and the alternate screen.
    ///
    /// `tick_rate` bounds how long [`App::next_event`] waits for input.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        // Restore the screen before the panic message prints
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            tick_rate,
            should_quit: false,
        })
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Terminal size as (width, height).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    /// Wait up to one tick for the next input event.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if event::poll(self.tick_rate)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// A full-screen app driven by [`App`].
pub trait TuiApp {
    fn app(&mut self) -> &mut App;

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()>;

    fn handle_mouse(&mut self, _mouse: MouseEvent, _now: Instant) -> Result<()> {
        Ok(())
    }

    fn handle_resize(&mut self, _width: u16, _height: u16) -> Result<()> {
        Ok(())
    }

    /// Called once per loop iteration, whether or not input arrived.
    fn tick(&mut self, _now: Instant) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self) -> Result<()>;

    /// Run until [`App::quit`] is called.
    #[cfg(not(tarpaulin_include))]
    fn run(&mut self) -> Result<()> {
        loop {
            self.tick(Instant::now())?;
            self.draw()?;

            match self.app().next_event()? {
                // Windows reports both press and release
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key, Instant::now())?
                }
                Some(Event::Mouse(mouse)) => self.handle_mouse(mouse, Instant::now())?,
                Some(Event::Resize(width, height)) => self.handle_resize(width, height)?,
                _ => {}
            }

            if self.app().should_quit() {
                break;
            }
        }
        Ok(())
    }
}
