/// Default config file content. Every value is commented out so the file
/// documents the defaults without pinning them.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Clipper client configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[history]
# size = 10                     # 1-1000, entries kept locally
# trim_interval_secs = 600      # 10-86400
# trim_initial_delay_secs = 30  # 0-3600

[hotkey]
# display_style = "auto"        # auto, symbols, words
# default_shortcut = "ctrl+alt+keyc"

[events]
# capacity = 256                # 16-4096

[logging]
# level = "info"                # trace, debug, info, warn, error
"##
}
