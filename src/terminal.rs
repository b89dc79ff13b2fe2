//! Terminal host implementations of the dialog and view seams

use crate::dialog::Dialogs;
use crate::formatting::{format_task_list, format_timer_status};
use crate::pomodoro::PomodoroTimer;
use crate::todo::TaskList;
use crate::view::Render;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Keys accepted on stdin while the timer runs in the foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunControl {
    Pause,
    Start,
    Reset,
    Quit,
}

impl RunControl {
    pub const HELP: &'static str = "Controls: p = pause, s = start, r = reset, q = quit";
}

impl FromStr for RunControl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "pause" => Ok(RunControl::Pause),
            "s" | "start" => Ok(RunControl::Start),
            "r" | "reset" => Ok(RunControl::Reset),
            "q" | "quit" => Ok(RunControl::Quit),
            other => Err(format!("Unknown control '{other}'. {}", Self::HELP)),
        }
    }
}

/// Alerts on stderr, confirmations read from stdin
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalDialogs {
    /// Approve every confirmation without asking
    pub assume_yes: bool,
}

impl TerminalDialogs {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

/// Whether a typed answer counts as approval
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl Dialogs for TerminalDialogs {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{message} [y/N] ");
        io::stderr().flush().ok();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(_) => false,
        }
    }
}

/// Prints state to stdout
///
/// While the timer runs the status line is redrawn in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalView {
    /// Render only when explicitly asked, not on every state change
    pub quiet: bool,
}

impl TerminalView {
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Render<PomodoroTimer> for TerminalView {
    fn render(&mut self, timer: &PomodoroTimer) {
        if self.quiet {
            return;
        }
        let line = format_timer_status(timer);
        if timer.is_running() {
            print!("\r{line}  ");
            io::stdout().flush().ok();
        } else {
            println!("\r{line}  ");
        }
    }
}

impl Render<TaskList> for TerminalView {
    fn render(&mut self, list: &TaskList) {
        if self.quiet {
            return;
        }
        println!("{}", format_task_list(list));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_run_control_parsing() {
        assert_eq!("p\n".parse::<RunControl>(), Ok(RunControl::Pause));
        assert_eq!(" S ".parse::<RunControl>(), Ok(RunControl::Start));
        assert_eq!("reset".parse::<RunControl>(), Ok(RunControl::Reset));
        assert_eq!("q".parse::<RunControl>(), Ok(RunControl::Quit));
        assert!("x".parse::<RunControl>().unwrap_err().contains("p = pause"));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let mut dialogs = TerminalDialogs::new(true);
        assert!(dialogs.confirm("Really?"));
    }
}
