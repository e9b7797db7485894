use std::io::IsTerminal;

use clap::Parser;

use callmap::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = cli.resolve()?;
    tracing::debug!(?config, "resolved configuration");

    let summary = callmap::run(&config)?;
    eprintln!("{summary}");
    Ok(())
}
