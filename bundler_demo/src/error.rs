use std::path::PathBuf;

/// Failures callers may want to tell apart. Everything else travels as a
/// plain `anyhow::Error` with context attached.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("unknown action: no selector flag given")]
    UnknownAction,
    #[error("malformed payload `{payload}`: expected {expected} `|`-separated fields, got {got}")]
    MalformedPayload {
        payload: String,
        expected: usize,
        got: usize,
    },
    #[error("dialog output is missing the `{0}` field")]
    MissingField(String),
    #[error("bundler returned no path for utility `{0}`")]
    UtilityUnavailable(String),
    #[error("bundler exited with status {code}: {output}")]
    BundlerFailed { code: i32, output: String },
    #[error("bundler returned a path that does not exist: {}", .0.display())]
    BundlerBadPath(PathBuf),
    #[error("bundler not installed (looked for {})", .0.display())]
    BundlerMissing(PathBuf),
}
