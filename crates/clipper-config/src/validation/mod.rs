//! Configuration validation.
//!
//! Each section pushes its problems into one list, reported together as a
//! single `ConfigError`.

mod helpers;


use clipper_common::ConfigError;

use crate::schema::ClipperConfig;
use helpers::{validate_range, validate_range_u64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ClipperConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_history(&mut errors, config);
    validate_hotkey(&mut errors, config);
    validate_range(
        &mut errors,
        "events.capacity",
        config.events.capacity,
        16,
        4096,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_history(errors: &mut Vec<String>, config: &ClipperConfig) {
    validate_range(errors, "history.size", config.history.size, 1, 1000);
    validate_range_u64(
        errors,
        "history.trim_interval_secs",
        config.history.trim_interval_secs,
        10,
        86_400,
    );
    validate_range_u64(
        errors,
        "history.trim_initial_delay_secs",
        config.history.trim_initial_delay_secs,
        0,
        3600,
    );
}

/// The default shortcut must name at least one modifier and a key.
fn validate_hotkey(errors: &mut Vec<String>, config: &ClipperConfig) {
    let shortcut = &config.hotkey.default_shortcut;
    let tokens = shortcut.split('+').filter(|t| !t.trim().is_empty()).count();
    if tokens < 2 {
        errors.push(format!(
            "hotkey.default_shortcut = {shortcut:?} needs a modifier and a key"
        ));
    }
}
