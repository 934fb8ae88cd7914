use athena_app::cli::Cli;
use athena_app::commands::{Context, run};
use athena_app::logging;
use athena_core::config::load_config;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter_handle = logging::init();

    let settings = load_config(cli.config.as_deref())?;
    logging::apply_level(
        &filter_handle,
        &logging::effective_level(&settings.logging.level, cli.verbose),
    );

    let ctx = Context::new(&cli, settings)?;
    tracing::debug!(zone = %ctx.zone, timestamps = %ctx.timestamps, "Starting");

    let stdout = std::io::stdout();
    run(&cli.command, &ctx, &mut stdout.lock())
}
