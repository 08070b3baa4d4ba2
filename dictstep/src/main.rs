use clap::Parser;
use dictstep_core::DialogSettings;

mod commands;
mod handlers;
mod output;
mod terminal_host;

use commands::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => DialogSettings::load_from_file(path)?,
        None => DialogSettings::default(),
    };
    log::debug!("dialog settings: {settings:?}");
    handlers::handle_command(cli.command, settings)
}
