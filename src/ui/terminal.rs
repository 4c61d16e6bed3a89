//! Colored terminal UI.

use std::io::Write;

use console::Term;

use super::{should_use_colors, NonInteractiveUI, OutputMode, Theme, UserInterface};

/// Terminal UI with colored status lines.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}\n", self.theme.header.apply_to(title)).ok();
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_progress() {
            let counter = format!("[{}/{}]", current, total);
            write!(self.out, "{} ", self.theme.dim.apply_to(counter)).ok();
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        let border = &self.theme.dim;
        writeln!(self.err).ok();
        writeln!(self.err, "    {}", border.apply_to("┌─ Command ──────────────────────────")).ok();
        writeln!(
            self.err,
            "    {} {}",
            border.apply_to("│"),
            self.theme.command.apply_to(command)
        )
        .ok();
        if !output.is_empty() {
            writeln!(self.err, "    {}", border.apply_to("├─ Output ───────────────────────────")).ok();
            for line in output.lines() {
                writeln!(self.err, "    {} {}", border.apply_to("│"), line).ok();
            }
        }
        writeln!(self.err, "    {}", border.apply_to("└────────────────────────────────────")).ok();
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

/// Create the UI for the current environment.
///
/// Falls back to plain output when not interactive or when stdout is not
/// a terminal.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
