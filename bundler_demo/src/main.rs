use anyhow::Context as _;
use anyhow::Result;
use bundler_demo::apps;
use bundler_demo::apps::Context;
use bundler_demo::apps::Outcome;
use bundler_demo::cli::Args;
use bundler_demo::env::WorkflowEnv;
use bundler_demo::fontawesome;
use bundler_demo::tools::bundler::BundlerProvisioner;
use bundler_demo::tools::bundler::Provisioner;
use bundler_demo::tools::SystemRunner;
use bundler_demo::tools::Tools;
use bundler_demo::workflow::settings::COLOUR_DEFAULT;
use bundler_demo::workflow::Feedback;
use bundler_demo::workflow::Settings;
use clap::Parser;

fn main() {
    let args = Args::parse();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:?}");
            report_error(&e);
            1
        }
    };

    std::process::exit(code);
}

fn run(args: Args) -> Result<i32> {
    let env = WorkflowEnv::from_env()?;
    bundler_demo::logging::init_logging(&env)?;
    tracing::debug!(?args, ?env, "starting");

    let mut provisioner =
        BundlerProvisioner::new(SystemRunner, &env.bundler_dir, env.bundler_cache_file());
    provisioner.ensure_ready().context("initialising bundler")?;

    // fetch everything up front so a first run installs it all in one go
    let tools = Tools::resolve(&mut provisioner)?;
    provisioner
        .icon("adjust", fontawesome::FONT, COLOUR_DEFAULT)
        .context("fetching sample icon")?;

    let mut ctx = Context {
        settings: Settings::load(env.settings_file())?,
        provisioner: Box::new(provisioner),
        runner: Box::new(SystemRunner),
        tools,
    };

    let outcome = apps::dispatch(
        &mut ctx,
        args.action(),
        args.query.as_deref(),
        &mut rand::thread_rng(),
        chrono::Utc::now(),
    )?;

    match outcome {
        Outcome::Feedback(feedback) => {
            tracing::debug!(items = feedback.len(), "sending feedback");
            feedback.send(std::io::stdout().lock())?;
            Ok(0)
        }
        Outcome::Exit(code) => Ok(code),
    }
}

/// Show the failure in the launcher's result list instead of an empty one.
fn report_error(e: &anyhow::Error) {
    if let Err(e) = Feedback::from_error(e).send(std::io::stdout().lock()) {
        eprintln!("error: could not report failure: {e:?}");
    }
}
