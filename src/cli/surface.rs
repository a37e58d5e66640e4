//! Terminal surface: views to stdout, notices and progress to stderr.

use std::fmt::Display;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::core::Control;
use crate::view::{ErrorView, Feedback, Surface};

/// Width of the progress bar in cells
const BAR_WIDTH: usize = 30;

/// Prints to the terminal
#[derive(Debug, Default)]
pub struct TerminalSurface {
    /// A progress line is open on stderr
    progress_open: AtomicBool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminate an open progress line before printing anything else
    fn close_progress(&self) {
        if self.progress_open.swap(false, Ordering::SeqCst) {
            eprintln!();
        }
    }
}

fn progress_bar(percent: u8) -> String {
    let filled = BAR_WIDTH * usize::from(percent.min(100)) / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}

impl Feedback for TerminalSurface {
    fn control(&self, control: &Control) {
        debug!(label = control.label(), enabled = control.is_enabled(), "Control changed");
        if !control.is_enabled() {
            eprintln!("{}", control.label());
        }
    }

    fn progress(&self, percent: u8) {
        eprint!("\rUploading {}", progress_bar(percent));
        let _ = std::io::stderr().flush();
        self.progress_open.store(true, Ordering::SeqCst);
    }

    fn show_error(&self, error: &ErrorView) {
        self.close_progress();
        eprintln!("❌ {}", error);
    }

    fn notify(&self, message: &str) {
        self.close_progress();
        eprintln!("⚠️  {}", message);
    }
}

impl<V: Display> Surface<V> for TerminalSurface {
    fn show(&self, view: &V) {
        self.close_progress();
        println!("{}", view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), format!("[{}]   0%", "-".repeat(30)));
        assert_eq!(progress_bar(50), format!("[{}{}]  50%", "#".repeat(15), "-".repeat(15)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "#".repeat(30)));
    }
}
