//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Easel Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[canvas]
# style_prefix = "gjs-"
# bus_capacity = 64              # 1-4096

[frame]
# recalc_debounce_ms = 0         # 0-1000, 0 = next tick
# transition_fallback_ms = 1000  # 0-10000, 0 = wait for transitionend forever
# animation_class = "frame-wrapper--anim"

[logging]
# level = "INFO"                 # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
