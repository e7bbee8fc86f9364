//! Full-screen view of the running simulation.

use crate::error::Error;
use crossterm::{
    cursor::{Hide, MoveTo, MoveToNextLine, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{
    io::{self, Write},
    thread,
    time::Duration,
};
use toruslife_lib::{CancelToken, Config, Glyphs, Grid, Renderer};

/// How often the key listener checks whether it should stop.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The terminal, switched to the alternate screen in raw mode.
///
/// Restored when dropped, even if switching to the alternate screen failed.
struct Screen<'a, W: Write> {
    out: W,
    glyphs: &'a Glyphs,
}

impl<'a, W: Write> Screen<'a, W> {
    fn new(out: W, glyphs: &'a Glyphs) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut screen = Screen { out, glyphs };
        execute!(screen.out, EnterAlternateScreen, Hide)?;
        Ok(screen)
    }

    fn draw(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        queue!(
            self.out,
            Print(format!(
                "Gen: {}  Cells: {}  Press [q] to stop.",
                generation,
                grid.population()
            )),
            MoveToNextLine(1)
        )?;
        for line in grid.display_with(self.glyphs).lines() {
            queue!(self.out, Print(line), MoveToNextLine(1))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for Screen<'_, W> {
    fn render(&mut self, grid: &Grid, generation: u64) {
        if let Err(e) = self.draw(grid, generation) {
            log::warn!("Failed to draw generation {}: {}", generation, e);
        }
    }
}

impl<W: Write> Drop for Screen<'_, W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn is_stop_key(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
}

/// Cancels the simulation when a stop key is pressed,
/// until `done` is cancelled.
fn listen_keys(cancel: CancelToken, done: CancelToken) -> io::Result<()> {
    while !done.is_cancelled() {
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if is_stop_key(&key) {
                cancel.cancel();
                break;
            }
        }
    }
    Ok(())
}

/// Runs the simulation in the full-screen view, and returns the final grid.
///
/// `q`, `Esc` and `Ctrl-C` stop the simulation.
pub(crate) fn simulate_with_tui(
    config: &Config,
    glyphs: &Glyphs,
    cancel: &CancelToken,
) -> Result<Grid, Error> {
    // Checks the seed before taking over the terminal.
    let mut simulation = config.simulation()?;

    let done = CancelToken::new();
    let listener = {
        let cancel = cancel.clone();
        let done = done.clone();
        thread::spawn(move || listen_keys(cancel, done))
    };

    let result = Screen::new(io::stdout(), glyphs)
        .map_err(Error::from)
        .and_then(|mut screen| {
            simulation
                .run(config.iterations, config.tick_delay, &mut screen, cancel)
                .map(|_| ())
                .map_err(Error::from)
        });

    done.cancel();
    match listener.join() {
        Ok(Err(e)) => log::warn!("Key listener failed: {}", e),
        Err(_) => log::warn!("Key listener panicked"),
        Ok(Ok(())) => (),
    }

    result.map(|()| simulation.into_grid())
}
