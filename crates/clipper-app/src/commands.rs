//! Subcommand handlers. Each returns the text to print so it can be tested
//! without a terminal.

use std::io::BufRead;

use tracing::{debug, warn};

use clipper_common::ClipperError;
use clipper_config::{config_to_json, ClipperConfig, DisplayStyleSetting};
use clipper_platform::keymap::{accelerator_to_display, codes_to_accelerator, parse_accelerator};
use clipper_platform::{
    config_file, data_dir, log_dir, render, CaptureOutcome, CaptureSession, DisplayStyle,
};

use crate::cli::{Command, HotkeyCommand, StyleArg};

pub fn run(command: Command, config: &ClipperConfig) -> Result<String, ClipperError> {
    match command {
        Command::Hotkey(hotkey) => run_hotkey(hotkey, config),
        Command::Paths => paths(),
        Command::Config => Ok(config_to_json(config)),
    }
}

fn run_hotkey(command: HotkeyCommand, config: &ClipperConfig) -> Result<String, ClipperError> {
    match command {
        HotkeyCommand::Parse { accelerator } => parse(&accelerator),
        HotkeyCommand::Display { accelerator, style } => {
            Ok(accelerator_to_display(&accelerator, resolve_style(style, config)))
        }
        HotkeyCommand::Codes { codes } => Ok(codes_to_accelerator(&codes)?),
        HotkeyCommand::Record { style } => {
            let stdin = std::io::stdin();
            record(stdin.lock(), resolve_style(style, config))
        }
    }
}

fn resolve_style(style: Option<StyleArg>, config: &ClipperConfig) -> DisplayStyle {
    let setting = style.map_or(config.hotkey.display_style, DisplayStyleSetting::from);
    DisplayStyle::from_setting(setting)
}

fn parse(accelerator: &str) -> Result<String, ClipperError> {
    let chord = parse_accelerator(accelerator);
    if !chord.is_registrable() {
        warn!(%accelerator, "not a registrable shortcut");
    }
    serde_json::to_string(&chord).map_err(|e| ClipperError::Other(e.to_string()))
}

fn paths() -> Result<String, ClipperError> {
    Ok(format!(
        "config: {}\ndata:   {}\nlogs:   {}",
        config_file()?.display(),
        data_dir()?.display(),
        log_dir()?.display(),
    ))
}

/// Drive a [`CaptureSession`] from `down <code>` / `up <code>` / `cancel`
/// lines. Returns the accelerator and its display form on completion.
pub fn record(input: impl BufRead, style: DisplayStyle) -> Result<String, ClipperError> {
    let mut session = CaptureSession::new();

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("down"), Some(code)) => {
                if let CaptureOutcome::Complete(accelerator) = session.key_down(code) {
                    let display = accelerator_to_display(&accelerator, style);
                    return Ok(format!("{accelerator}\t{display}"));
                }
                debug!(held = %render(&session.preview(), style), "recording");
            }
            (Some("up"), Some(code)) => session.key_up(code),
            (Some("cancel"), None) => session.cancel(),
            (None, _) => {}
            _ => warn!(%line, "ignoring unrecognised input"),
        }
    }

    Err(ClipperError::Other(
        "input ended before a shortcut was recorded".into(),
    ))
}
