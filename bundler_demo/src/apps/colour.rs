use super::Context;
use crate::error::DemoError;
use crate::sys;
use crate::tools::cocoa_dialog;
use crate::tools::notifier;
use crate::tools::pashua;
use crate::workflow::settings::KEY_COLOUR;
use anyhow::Result;

/// Window description for Pashua. The umlauts are there on purpose: they
/// catch anything along the way that is not speaking UTF-8.
pub fn dialog_config(current: &str) -> String {
    format!(
        "\
current.type = textfield
current.label = Cürrent CSS cölour
current.disabled = 1
current.default = {current}

default.type = defaultbutton
default.label = Save colour

cancel.type = cancelbutton

colour.type = textfield
colour.label = New CSS colour
colour.tooltip = Enter a CSS colour (without #)
"
    )
}

/// A CSS hex colour without the `#`: 3 or 6 hex digits, any case.
pub fn is_valid_colour(colour: &str) -> bool {
    matches!(colour.len(), 3 | 6) && colour.chars().all(|c| c.is_ascii_hexdigit())
}

/// Ask for a new icon colour until the user enters a valid one or cancels.
pub fn run(ctx: &mut Context) -> Result<()> {
    let config = dialog_config(ctx.settings.colour());

    loop {
        let data = pashua::run(ctx.runner.as_mut(), &ctx.tools.pashua, &config)?;
        tracing::debug!(?data, "Pashua returned");

        if pashua::cancelled(&data) {
            return Ok(());
        }

        let raw = data
            .get(KEY_COLOUR)
            .ok_or_else(|| DemoError::MissingField(KEY_COLOUR.to_owned()))?;
        let colour = raw.trim_start_matches('#');

        if !is_valid_colour(colour) {
            tracing::info!(colour, "rejected colour");
            cocoa_dialog::show_error(
                ctx.runner.as_mut(),
                &ctx.tools.cocoa_dialog,
                "Invälid CSS colour",
                colour,
                sys::ICON_WARNING,
            )?;
            continue;
        }

        let colour = colour.to_ascii_lowercase();
        ctx.settings.set(KEY_COLOUR, &colour)?;
        tracing::info!(%colour, "saved colour");

        notifier::notify(
            ctx.runner.as_mut(),
            &ctx.tools.terminal_notifier,
            "New colour",
            &format!("#{colour}"),
        )?;
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_and_long_hex() {
        for colour in ["abc", "ABC", "444444", "BadA55"] {
            assert!(is_valid_colour(colour), "{colour}");
        }
    }

    #[test]
    fn rejects_bad_colours() {
        for colour in ["", "xyz", "1234", "12345", "1234567", "#abc", "ab c"] {
            assert!(!is_valid_colour(colour), "{colour}");
        }
    }

    #[test]
    fn config_prefills_current_colour() {
        let config = dialog_config("bada55");
        assert!(config.contains("current.default = bada55\n"));
        assert!(config.contains("cancel.type = cancelbutton"));
    }
}
