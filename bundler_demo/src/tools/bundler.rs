//! Client for the Alfred Dependency Bundler.
//!
//! The bundler installs shared workflow utilities and renders icons on
//! demand. Lookups shell out to the bundler's command-line entry point and
//! are cached in memory and on disk, so only the first lookup of a given
//! utility or icon pays for it. A cached path is dropped once the file it
//! points at disappears.

use super::ProcessRunner;
use crate::error::DemoError;
use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Relative location of the bundler's shell entry point inside its install
/// directory.
pub const BUNDLET: &str = "bundler/bundlets/alfred.bundler.sh";

pub trait Provisioner {
    /// Make sure the bundler is usable. Cheap after the first call.
    fn ensure_ready(&mut self) -> Result<()>;

    /// Path to the executable of the named utility, installing it first if
    /// needed.
    fn utility(&mut self, name: &str) -> Result<PathBuf>;

    /// Path to a locally cached PNG of `glyph` from `font` in `colour`.
    fn icon(&mut self, glyph: &str, font: &str, colour: &str) -> Result<PathBuf>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ResolvedPaths {
    #[serde(default)]
    utilities: HashMap<String, PathBuf>,
    #[serde(default)]
    icons: HashMap<String, PathBuf>,
}

pub struct BundlerProvisioner<R> {
    runner: R,
    bundlet: PathBuf,
    cache_file: PathBuf,
    resolved: ResolvedPaths,
    ready: bool,
}

impl<R: ProcessRunner> BundlerProvisioner<R> {
    pub fn new(runner: R, bundler_dir: &Path, cache_file: PathBuf) -> Self {
        let resolved = load_resolved(&cache_file);
        Self {
            runner,
            bundlet: bundler_dir.join(BUNDLET),
            cache_file,
            resolved,
            ready: false,
        }
    }

    /// Run the bundlet and return the path it settled on, if it printed one.
    /// A failing run or a path that is not on disk is an error, so nothing
    /// bogus makes it into the cache.
    fn call_bundler(&mut self, args: &[&str]) -> Result<Option<PathBuf>> {
        self.ensure_ready()?;

        let captured = self
            .runner
            .communicate(&self.bundlet, args, &[])
            .context(format!("calling bundler with {args:?}"))?;
        let stdout =
            String::from_utf8(captured.stdout).context("bundler output is not valid UTF-8")?;

        if captured.code != 0 {
            return Err(DemoError::BundlerFailed {
                code: captured.code,
                output: stdout.trim().to_owned(),
            })
            .context(format!("calling bundler with {args:?}"));
        }

        // the bundler may print progress before the path
        let path = stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .last()
            .map(PathBuf::from);

        match path {
            Some(path) if !path.exists() => Err(DemoError::BundlerBadPath(path).into()),
            path => Ok(path),
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.cache_file.parent() {
            fs::create_dir_all(parent)
                .context(format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_vec_pretty(&self.resolved)?;
        fs::write(&self.cache_file, json)
            .context(format!("writing {}", self.cache_file.display()))
    }
}

impl<R: ProcessRunner> Provisioner for BundlerProvisioner<R> {
    fn ensure_ready(&mut self) -> Result<()> {
        if self.ready {
            return Ok(());
        }
        if !self.bundlet.is_file() {
            return Err(DemoError::BundlerMissing(self.bundlet.clone()).into());
        }
        tracing::debug!(bundlet = %self.bundlet.display(), "bundler ready");
        self.ready = true;
        Ok(())
    }

    fn utility(&mut self, name: &str) -> Result<PathBuf> {
        if let Some(path) = self.resolved.utilities.get(name) {
            if path.exists() {
                return Ok(path.clone());
            }
            tracing::info!(name, path = %path.display(), "cached utility has gone away");
        }

        tracing::info!(name, "asking bundler for utility");
        let path = self
            .call_bundler(&["utility", name])?
            .ok_or_else(|| DemoError::UtilityUnavailable(name.to_owned()))?;

        self.resolved.utilities.insert(name.to_owned(), path.clone());
        self.save()?;
        Ok(path)
    }

    fn icon(&mut self, glyph: &str, font: &str, colour: &str) -> Result<PathBuf> {
        let key = format!("{font}/{colour}/{glyph}");
        if let Some(path) = self.resolved.icons.get(&key) {
            if path.exists() {
                return Ok(path.clone());
            }
            tracing::info!(%key, path = %path.display(), "cached icon has gone away");
        }

        tracing::info!(%key, "asking bundler for icon");
        let path = self
            .call_bundler(&["icon", font, glyph, colour])?
            .context(format!("bundler returned no path for icon {key}"))?;

        self.resolved.icons.insert(key, path.clone());
        self.save()?;
        Ok(path)
    }
}

fn load_resolved(cache_file: &Path) -> ResolvedPaths {
    let raw = match fs::read(cache_file) {
        Ok(raw) => raw,
        Err(_) => return ResolvedPaths::default(),
    };
    match serde_json::from_slice(&raw) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::warn!(file = %cache_file.display(), "ignoring corrupt bundler cache: {e}");
            ResolvedPaths::default()
        }
    }
}
