use crate::error::DemoError;
use crate::tools::bundler::Provisioner;
use crate::tools::ProcessRunner;
use crate::tools::Tools;
use crate::workflow::Feedback;
use crate::workflow::Settings;
use anyhow::Result;
use chrono::DateTime;
use chrono::Utc;
use rand::Rng;

pub mod colour;
pub mod dates;
pub mod icons;
pub mod notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Icons,
    Notify,
    Colour,
    Dates,
}

/// Everything a handler may touch, passed in explicitly.
pub struct Context {
    pub settings: Settings,
    pub provisioner: Box<dyn Provisioner>,
    pub runner: Box<dyn ProcessRunner>,
    pub tools: Tools,
}

/// What the binary should do once a handler is finished.
#[derive(Debug)]
pub enum Outcome {
    /// Print the results for the launcher and exit 0.
    Feedback(Feedback),
    /// Exit with this status.
    Exit(i32),
}

pub fn dispatch(
    ctx: &mut Context,
    action: Option<Action>,
    query: Option<&str>,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Result<Outcome> {
    let action = action.ok_or(DemoError::UnknownAction)?;
    tracing::debug!(?action, ?query, "dispatching");

    let outcome = match action {
        Action::Icons => Outcome::Feedback(icons::run(ctx, query, rng)?),
        Action::Notify => Outcome::Exit(notify::run(ctx, query)?),
        Action::Colour => {
            colour::run(ctx)?;
            Outcome::Exit(0)
        }
        Action::Dates => Outcome::Feedback(dates::run(now, rng)),
    };
    Ok(outcome)
}
