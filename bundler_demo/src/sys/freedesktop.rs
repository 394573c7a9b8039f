// only useful for running the workflow outside of macOS while developing
pub const ICON_WARNING: &str = "/usr/share/icons/Adwaita/scalable/status/dialog-warning.svg";
pub const ICON_ERROR: &str = "/usr/share/icons/Adwaita/scalable/status/dialog-error.svg";
