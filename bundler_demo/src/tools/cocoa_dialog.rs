use super::ProcessRunner;
use anyhow::Result;
use std::path::Path;

/// Show a modal error box with a single OK button. The button pressed is of
/// no interest, so the exit code is dropped.
pub fn show_error(
    runner: &mut dyn ProcessRunner,
    cocoa_dialog: &Path,
    text: &str,
    informative_text: &str,
    icon_file: &str,
) -> Result<()> {
    let code = runner.status(
        cocoa_dialog,
        &[
            "ok-msgbox",
            "--title",
            "Error",
            "--text",
            text,
            "--informative-text",
            informative_text,
            "--button1",
            "OK",
            "--icon-file",
            icon_file,
        ],
    )?;
    tracing::debug!(code, "cocoaDialog closed");
    Ok(())
}
