use crate::env::WorkflowEnv;
use anyhow::Context;
use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "bundler_demo.log";
pub const LOG_LEVEL_VAR: &str = "BUNDLER_DEMO_LOG";

fn default_level(env: &WorkflowEnv) -> &'static str {
    if env.debug {
        "debug"
    } else {
        "info"
    }
}

/// Log to a file in the workflow's cache directory and to stderr, which the
/// launcher shows in its debugger. stdout belongs to the result protocol.
pub fn init_logging(env: &WorkflowEnv) -> Result<()> {
    std::fs::create_dir_all(&env.cache_dir)
        .context(format!("creating {}", env.cache_dir.display()))?;
    let file_writer = tracing_appender::rolling::never(&env.cache_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_LEVEL_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level(env)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("installing log subscriber")?;

    tracing::debug!(log_file = %env.cache_dir.join(LOG_FILE_NAME).display(), "logging ready");
    Ok(())
}
