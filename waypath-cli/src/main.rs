//! Entry point for the `waypath` command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    // Library crates log through `log`; the subscriber's bridge picks those
    // records up. Logs go to stderr so stdout stays valid GeoJSON.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    waypath_cli::run()?;
    Ok(())
}
