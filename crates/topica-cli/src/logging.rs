use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted after `RUST_LOG`.
const LOG_ENV: &str = "TOPICA_LOG";

/// Install the stderr subscriber. Stdout stays reserved for command output.
pub fn init(verbose: bool, json: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "topica=debug" } else { "topica=warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(with_crate_targets(default_level)));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }
    Ok(())
}

/// Expand `topica=<level>` to every workspace crate target.
fn with_crate_targets(directive: &str) -> String {
    let level = directive.trim_start_matches("topica=");
    [
        "topica",
        "topica_core",
        "topica_transcript",
        "topica_blocks",
        "topica_search",
        "topica_store",
    ]
    .iter()
    .map(|target| format!("{target}={level}"))
    .collect::<Vec<_>>()
    .join(",")
}
