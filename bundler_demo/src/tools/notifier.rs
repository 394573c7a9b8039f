use super::ProcessRunner;
use anyhow::Result;
use std::path::Path;

/// Post a notification through `terminal-notifier`, returning its exit code.
pub fn notify(
    runner: &mut dyn ProcessRunner,
    terminal_notifier: &Path,
    title: &str,
    message: &str,
) -> Result<i32> {
    tracing::debug!(title, message, "notify");
    runner.status(
        terminal_notifier,
        &["-title", title, "-message", message],
    )
}
