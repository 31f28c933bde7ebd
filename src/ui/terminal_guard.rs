use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode and the alternate screen stay active until this is dropped or
/// the process panics. Restoration runs at most once across both paths.
pub struct TerminalGuard {
    engaged: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn engage() -> Self {
        let guard = Self {
            engaged: Arc::new(AtomicBool::new(true)),
        };
        let engaged = Arc::clone(&guard.engaged);
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if release(&engaged) {
                leave_tui_mode();
            }
            tracing::error!(panic = %info, "UI thread panicked");
            previous_hook(info);
        }));
        guard
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if release(&self.engaged) {
            leave_tui_mode();
        }
    }
}

/// True for the first caller only.
fn release(engaged: &AtomicBool) -> bool {
    engaged.swap(false, Ordering::SeqCst)
}

fn enter_tui_mode(stdout: &mut Stdout) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Clear(ClearType::All), Hide)
}

fn leave_tui_mode() {
    if let Err(err) = disable_raw_mode() {
        tracing::warn!(error = %err, "Failed to leave raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        tracing::warn!(error = %err, "Failed to leave alternate screen");
    }
}

pub fn setup_terminal() -> io::Result<(Tui, TerminalGuard)> {
    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;
    let guard = TerminalGuard::engage();
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_fires_once() {
        let engaged = AtomicBool::new(true);
        assert!(release(&engaged));
        assert!(!release(&engaged));
        assert!(!release(&engaged));
    }
}
