use anyhow::Context;
use anyhow::Result;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_BUNDLE_ID: &str = "net.deanishe.alfred-bundler-demo";
const BUNDLER_DIR_VAR: &str = "ALFRED_BUNDLER_DIR";
const BUNDLER_DIR_NAME: &str = "alfred.bundler-aries";

/// Where the launcher wants this workflow to keep its files.
#[derive(Debug, Clone)]
pub struct WorkflowEnv {
    pub bundle_id: String,
    pub data_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub bundler_dir: PathBuf,
    pub debug: bool,
}

impl WorkflowEnv {
    pub fn from_env() -> Result<WorkflowEnv> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Resolve the environment from `lookup`, falling back to the platform's
    /// data and cache directories when the launcher did not say.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<WorkflowEnv> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let bundle_id = var("alfred_workflow_bundleid")
            .map(|v| v.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_BUNDLE_ID.to_owned());

        let data_dir = match var("alfred_workflow_data") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .context("no data directory on this platform")?
                .join(&bundle_id),
        };

        let cache_dir = match var("alfred_workflow_cache") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::cache_dir()
                .context("no cache directory on this platform")?
                .join(&bundle_id),
        };

        let bundler_dir = match var(BUNDLER_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .context("no data directory on this platform")?
                .join("Alfred 2")
                .join("Workflow Data")
                .join(BUNDLER_DIR_NAME),
        };

        let debug = var("alfred_debug").is_some_and(|v| v == "1");

        Ok(WorkflowEnv {
            bundle_id,
            data_dir,
            cache_dir,
            bundler_dir,
            debug,
        })
    }

    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    pub fn bundler_cache_file(&self) -> PathBuf {
        self.cache_dir.join("bundler.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> WorkflowEnv {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect::<HashMap<_, _>>();
        WorkflowEnv::from_lookup(|key| vars.get(key).cloned()).unwrap()
    }

    #[test]
    fn launcher_variables_win() {
        let env = env_from(&[
            ("alfred_workflow_bundleid", "com.example.demo"),
            ("alfred_workflow_data", "/data/demo"),
            ("alfred_workflow_cache", "/cache/demo"),
            ("ALFRED_BUNDLER_DIR", "/bundler"),
            ("alfred_debug", "1"),
        ]);
        assert_eq!(env.bundle_id, "com.example.demo");
        assert_eq!(env.settings_file(), PathBuf::from("/data/demo/settings.json"));
        assert_eq!(env.bundler_cache_file(), PathBuf::from("/cache/demo/bundler.json"));
        assert_eq!(env.bundler_dir, PathBuf::from("/bundler"));
        assert!(env.debug);
    }

    #[test]
    fn empty_variables_fall_back() {
        let env = env_from(&[
            ("alfred_workflow_bundleid", ""),
            ("alfred_workflow_data", "/data/demo"),
            ("alfred_workflow_cache", "/cache/demo"),
            ("ALFRED_BUNDLER_DIR", "/bundler"),
        ]);
        assert_eq!(env.bundle_id, DEFAULT_BUNDLE_ID);
        assert!(!env.debug);
    }
}
