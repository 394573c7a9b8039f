use crate::sys;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    pub path: PathBuf,
}

/// One row in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            arg: None,
            valid: false,
            icon: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    pub fn icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon = Some(Icon { path: path.into() });
        self
    }
}

/// Script Filter results, delivered to the launcher in one batch.
#[derive(Debug, Default, Serialize)]
pub struct Feedback {
    pub items: Vec<Item>,
}

impl Feedback {
    /// A single row describing `err`, shown instead of an empty list when an
    /// action fails.
    pub fn from_error(err: &anyhow::Error) -> Feedback {
        let mut feedback = Feedback::default();
        feedback.push(
            Item::new("Error in the Bundler demo workflow")
                .subtitle(format!("{err:#}"))
                .icon(sys::ICON_ERROR),
        );
        feedback
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn send(&self, mut out: impl Write) -> Result<()> {
        serde_json::to_writer(&mut out, self)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DemoError;
    use anyhow::Context;
    use serde_json::json;

    #[test]
    fn error_becomes_single_invalid_row() {
        let err = Err::<(), _>(DemoError::UnknownAction)
            .context("dispatching")
            .unwrap_err();
        let fb = Feedback::from_error(&err);

        assert_eq!(fb.len(), 1);
        let item = &fb.items[0];
        assert_eq!(item.title, "Error in the Bundler demo workflow");
        assert_eq!(
            item.subtitle,
            "dispatching: unknown action: no selector flag given"
        );
        assert!(!item.valid);
        assert!(item.arg.is_none());
        assert_eq!(
            item.icon.as_ref().map(|i| i.path.as_path()),
            Some(std::path::Path::new(sys::ICON_ERROR))
        );
    }

    #[test]
    fn optional_fields_are_omitted() {
        let mut fb = Feedback::default();
        fb.push(Item::new("12:00 UTC"));
        fb.push(
            Item::new("adjust")
                .subtitle("Font Awesome // #444444")
                .arg("adjust|fontawesome|444444")
                .valid(true)
                .icon("/tmp/adjust.png"),
        );

        let mut out = Vec::new();
        fb.send(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "items": [
                    { "title": "12:00 UTC", "subtitle": "", "valid": false },
                    {
                        "title": "adjust",
                        "subtitle": "Font Awesome // #444444",
                        "arg": "adjust|fontawesome|444444",
                        "valid": true,
                        "icon": { "path": "/tmp/adjust.png" }
                    }
                ]
            })
        );
    }
}
