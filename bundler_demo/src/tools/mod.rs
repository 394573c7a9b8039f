use anyhow::Context;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;

pub mod bundler;
pub mod cocoa_dialog;
pub mod notifier;
pub mod pashua;

use bundler::Provisioner;

pub const TERMINAL_NOTIFIER: &str = "terminal-notifier";
pub const PASHUA: &str = "Pashua";
pub const COCOA_DIALOG: &str = "cocoaDialog";

/// Seam between the workflow and the helper programs it shells out to.
pub trait ProcessRunner {
    /// Run `program` to completion and return its exit code.
    fn status(&mut self, program: &Path, args: &[&str]) -> Result<i32>;

    /// Run `program`, feed `stdin` to it, and collect everything it writes to
    /// stdout along with its exit code.
    fn communicate(&mut self, program: &Path, args: &[&str], stdin: &[u8]) -> Result<Captured>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub code: i32,
    pub stdout: Vec<u8>,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn status(&mut self, program: &Path, args: &[&str]) -> Result<i32> {
        tracing::debug!(program = %program.display(), ?args, "spawning");
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("running {}", program.display()))?;

        // killed by a signal
        Ok(status.code().unwrap_or(1))
    }

    fn communicate(&mut self, program: &Path, args: &[&str], stdin: &[u8]) -> Result<Captured> {
        tracing::debug!(program = %program.display(), ?args, "spawning");
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawning {}", program.display()))?;

        if let Some(mut pipe) = child.stdin.take() {
            pipe.write_all(stdin)
                .with_context(|| format!("writing to {}", program.display()))?;
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("waiting for {}", program.display()))?;
        Ok(Captured {
            code: output.status.code().unwrap_or(1),
            stdout: output.stdout,
        })
    }
}

/// Paths to the helper programs, resolved once at startup so a missing
/// utility is installed on the first run rather than when an action first
/// needs it.
#[derive(Debug, Clone)]
pub struct Tools {
    pub terminal_notifier: PathBuf,
    pub pashua: PathBuf,
    pub cocoa_dialog: PathBuf,
}

impl Tools {
    pub fn resolve(provisioner: &mut dyn Provisioner) -> Result<Tools> {
        Ok(Tools {
            terminal_notifier: provisioner
                .utility(TERMINAL_NOTIFIER)
                .context("resolving terminal-notifier")?,
            pashua: provisioner.utility(PASHUA).context("resolving Pashua")?,
            cocoa_dialog: provisioner
                .utility(COCOA_DIALOG)
                .context("resolving cocoaDialog")?,
        })
    }
}
