//! Pashua dialogs.
//!
//! Pashua reads a `key = value` window description on stdin and reports the
//! user's input as `key=value` lines on stdout. Its default text encoding is
//! MacRoman, so it is always started with `-e utf8` and both directions go
//! through [`encode_config`] and [`decode_output`].

use super::ProcessRunner;
use anyhow::Context;
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

pub type PashuaOutput = HashMap<String, String>;

pub fn encode_config(config: &str) -> Vec<u8> {
    config.as_bytes().to_vec()
}

pub fn decode_output(raw: &[u8]) -> Result<PashuaOutput> {
    let text = std::str::from_utf8(raw).context("Pashua output is not valid UTF-8")?;

    let mut data = HashMap::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (key, value) = line
            .split_once('=')
            .context(format!("unexpected Pashua output line: {line:?}"))?;
        data.insert(key.to_owned(), value.to_owned());
    }
    Ok(data)
}

/// Show the dialog described by `config` and block until it is closed.
pub fn run(runner: &mut dyn ProcessRunner, pashua: &Path, config: &str) -> Result<PashuaOutput> {
    let captured = runner
        .communicate(pashua, &["-e", "utf8", "-"], &encode_config(config))
        .context("running Pashua")?;
    if !captured.success() {
        tracing::debug!(code = captured.code, "Pashua exited with an error");
    }
    decode_output(&captured.stdout)
}

/// `true` when the window was dismissed with its cancel button.
pub fn cancelled(output: &PashuaOutput) -> bool {
    output.get("cancel").is_some_and(|v| v == "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_skips_blank_lines_and_splits_on_first_equals() {
        let out = decode_output(b"\n colour=a=b \ncancel=0\n\n").unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out["colour"], "a=b");
        assert!(!cancelled(&out));
    }

    #[test]
    fn decode_keeps_non_ascii_text() {
        let out = decode_output("label=Cürrent cölour\ncancel=1".as_bytes()).unwrap();
        assert_eq!(out["label"], "Cürrent cölour");
        assert!(cancelled(&out));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        // MacRoman "ü"
        assert!(decode_output(b"colour=\x9f").is_err());
    }

    #[test]
    fn decode_rejects_lines_without_separator() {
        assert!(decode_output(b"colour").is_err());
    }
}
