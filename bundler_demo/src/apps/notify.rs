use super::Context;
use crate::error::DemoError;
use crate::tools::notifier;
use anyhow::Result;

pub const TITLE: &str = "Bundler Icon";

/// A glyph as passed around in result `arg`s: `name|font|colour`.
#[derive(Debug, PartialEq, Eq)]
pub struct GlyphRef<'a> {
    pub name: &'a str,
    pub font: &'a str,
    pub colour: &'a str,
}

impl<'a> GlyphRef<'a> {
    pub fn parse(payload: &'a str) -> Result<GlyphRef<'a>, DemoError> {
        let fields = payload.split('|').collect::<Vec<_>>();
        match fields[..] {
            [name, font, colour] => Ok(GlyphRef { name, font, colour }),
            _ => Err(DemoError::MalformedPayload {
                payload: payload.to_owned(),
                expected: 3,
                got: fields.len(),
            }),
        }
    }
}

/// Announce the chosen glyph. Returns the notifier's exit code.
pub fn run(ctx: &mut Context, query: Option<&str>) -> Result<i32> {
    let glyph = GlyphRef::parse(query.unwrap_or_default())?;
    tracing::debug!(?glyph, "notify");

    let message = format!("`{}` from `{}`", glyph.name, glyph.font);
    notifier::notify(
        ctx.runner.as_mut(),
        &ctx.tools.terminal_notifier,
        TITLE,
        &message,
    )
}
