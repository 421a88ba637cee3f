//! Terminal setup and restoration.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::warn;

/// Puts the terminal into raw mode on the alternate screen and undoes both on drop.
///
/// Drop runs on early returns and during panic unwinding, so the shell is
/// never left in raw mode.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode and enters the alternate screen on `out`.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // Constructed before the screen switch so a failure there still restores raw mode.
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }

    fn restore(&mut self) -> io::Result<()> {
        let screen = execute!(self.out, LeaveAlternateScreen, Show);
        disable_raw_mode()?;
        screen
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_leaves_alternate_screen() {
        let mut out = Vec::new();
        {
            let _guard = TerminalGuard { out: &mut out };
        }
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049l"), "got {:?}", written);
        assert!(written.contains("\x1b[?25h"), "got {:?}", written);
    }

    #[test]
    fn test_drop_restores_during_panic() {
        let mut out = Vec::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = TerminalGuard { out: &mut out };
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert!(String::from_utf8_lossy(&out).contains("\x1b[?1049l"));
    }
}
