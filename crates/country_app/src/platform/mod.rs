//! Everything that touches the outside world: terminal, network, log files.
pub mod cli;
mod app;
mod effects;
mod logging;
mod oneshot;
mod ui;

use lookup_logging::lookup_info;

use country_engine::EngineHandle;

pub fn run(args: cli::Args) -> anyhow::Result<()> {
    logging::initialize(args.log_destination(), args.log_level);
    let settings = args.fetch_settings();
    lookup_info!(
        "Starting country_finder api_base={} connect_timeout={:?} request_timeout={:?}",
        settings.base_url,
        settings.connect_timeout,
        settings.request_timeout
    );

    let engine = EngineHandle::new(settings)?;
    let runner = effects::EffectRunner::new(engine);
    match args.query {
        Some(query) => oneshot::run(&runner, query),
        None => app::run_app(&runner),
    }
}
