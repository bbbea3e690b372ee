use clap::{Parser, Subcommand, ValueEnum};

use clipper_config::DisplayStyleSetting;

/// Clipper: clipboard manager client tools.
#[derive(Parser, Debug)]
#[command(name = "clipper", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Work with global shortcut strings.
    #[command(subcommand)]
    Hotkey(HotkeyCommand),

    /// Print the platform directories Clipper uses.
    Paths,

    /// Print the effective configuration as JSON.
    Config,
}

#[derive(Subcommand, Debug)]
pub enum HotkeyCommand {
    /// Decode an accelerator string (`ctrl+shift+keya`) into a chord.
    Parse { accelerator: String },

    /// Render an accelerator for display.
    Display {
        accelerator: String,
        /// Defaults to the config's `hotkey.display_style`.
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
    },

    /// Convert held key-event codes (`ControlLeft KeyQ`) to an accelerator.
    Codes {
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Record a shortcut from stdin lines of `down <code>`, `up <code>` or
    /// `cancel`. Prints the accelerator once a valid chord is held.
    Record {
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleArg {
    Auto,
    Symbols,
    Words,
}

impl From<StyleArg> for DisplayStyleSetting {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Auto => DisplayStyleSetting::Auto,
            StyleArg::Symbols => DisplayStyleSetting::Symbols,
            StyleArg::Words => DisplayStyleSetting::Words,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
