mod app;
mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use fan_value_engine::config::init_app_config;
use fan_value_engine::data::Dataset;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config();
    logging::init_logging(&config)?;

    // Missing or malformed input is fatal before any UI is shown
    let dataset = Dataset::load(&config.data)?;

    if args.headless || !is_terminal() {
        return event::run_headless(&dataset, args.json);
    }

    let mut app = App::new(dataset, args.view);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
