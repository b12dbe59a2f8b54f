//! Terminal presentation preferences, resolved once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored and tables render unclamped.
const MIN_TABLE_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Colorize type tags and headers in table output.
    pub table_color: bool,
    /// Width tables are fitted into.
    pub term_width: Option<usize>,
}

/// What the environment reports about the terminal.
#[derive(Clone, Debug, Default)]
struct Terminal {
    is_tty: bool,
    no_color: bool,
    columns: Option<String>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok(),
        }
    }
}

impl UiPrefs {
    fn resolve(flags: &GlobalFlags, terminal: &Terminal) -> Self {
        let is_table = flags.format == OutputFormat::Table;
        let table_color = is_table
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => terminal.is_tty && !terminal.no_color && !flags.quiet,
            };

        let term_width = terminal
            .columns
            .as_deref()
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TABLE_WIDTH);

        Self {
            table_color,
            term_width,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs::resolve(flags, &Terminal::detect()));
}

/// Preferences set by [`init`], or plain output if it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
