//=========================================================================
// Holy Pong: Binary Entry Point
//=========================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use holy_pong::core::config::DEFAULT_CONFIG_PATH;
use holy_pong::{AppBuilder, DEFAULT_TITLE};

/// Pong-style game with a keyboard menu and JSON display settings
#[derive(Parser, Debug)]
#[command(name = "holy_pong")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (read at startup, written by the settings screen)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let result = AppBuilder::new()
        .with_config_path(args.config)
        .with_title(args.title)
        .build()
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
