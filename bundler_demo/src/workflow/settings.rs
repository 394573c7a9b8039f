use anyhow::Context;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub const KEY_COLOUR: &str = "colour";
pub const COLOUR_DEFAULT: &str = "444444";

/// The workflow's `settings.json`. Every write is saved straight away.
#[derive(Debug)]
pub struct Settings {
    path: PathBuf,
    values: serde_json::Map<String, serde_json::Value>,
}

impl Settings {
    pub fn load(path: PathBuf) -> Result<Settings> {
        let values = match fs::read(&path) {
            Ok(raw) => serde_json::from_slice(&raw)
                .context(format!("parsing settings {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => serde_json::Map::new(),
            Err(e) => {
                return Err(e).context(format!("reading settings {}", path.display()));
            }
        };
        Ok(Settings { path, values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .insert(key.to_owned(), serde_json::Value::String(value.to_owned()));
        self.save()
    }

    /// Icon colour chosen by the user, or the default.
    pub fn colour(&self) -> &str {
        self.get(KEY_COLOUR).unwrap_or(COLOUR_DEFAULT)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context(format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_vec_pretty(&self.values)?;
        fs::write(&self.path, json).context(format!("writing settings {}", self.path.display()))
    }
}
