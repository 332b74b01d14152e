use anyhow::Context;
use clap::Parser;

use moviefetch::api::ReqwestTransport;
use moviefetch::cli::Cli;
use moviefetch::controller::FilmController;
use moviefetch::{logging, plain, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let log_path = logging::init_tracing(&config.log).context("failed to set up logging")?;
    tracing::info!(
        endpoint = %config.api.endpoint,
        plain = cli.plain,
        log = ?log_path,
        "Starting moviefetch"
    );

    let transport = ReqwestTransport::new(&config.api).context("failed to build HTTP client")?;
    let controller = FilmController::new(transport, config.api.endpoint.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    if cli.plain {
        let state = runtime.block_on(plain::fetch_once(&controller))?;
        let output = plain::render(&state, cli.output_format())?;
        println!("{}", output.trim_end());
        return Ok(());
    }

    ui::runtime::run(controller, runtime.handle().clone(), config.ui.tick_rate())
        .context("terminal UI failed")?;
    Ok(())
}
