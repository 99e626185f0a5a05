use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

type Cleanup = Arc<Mutex<Option<Box<dyn FnOnce() + Send + 'static>>>>;

/// Restores the terminal on drop, and on panic before the default hook prints.
pub struct TerminalGuard {
    cleanup: Cleanup,
}

impl TerminalGuard {
    fn new<F: FnOnce() + Send + 'static>(cleanup: F) -> Self {
        let guard = Self {
            cleanup: Arc::new(Mutex::new(Some(Box::new(cleanup)))),
        };
        guard.install_panic_hook();
        guard
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_cleanup(&cleanup);
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_cleanup(&self.cleanup);
    }
}

fn run_cleanup(cleanup: &Cleanup) {
    if let Ok(mut slot) = cleanup.lock() {
        if let Some(cleanup) = slot.take() {
            cleanup();
        }
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = enter_guarded(restore_terminal, || {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableBracketedPaste)?;
        Ok(())
    })?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    Ok((terminal, guard))
}

/// Arms `cleanup` before running `enter`, so a failing step still restores
/// whatever was already switched on.
fn enter_guarded<C, E>(cleanup: C, enter: E) -> io::Result<TerminalGuard>
where
    C: FnOnce() + Send + 'static,
    E: FnOnce() -> io::Result<()>,
{
    let guard = TerminalGuard::new(cleanup);
    enter()?;
    Ok(guard)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableBracketedPaste);
    let _ = stdout.execute(LeaveAlternateScreen);
}
