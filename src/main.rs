/*!
 * Command-line interface for gpt-prompter
 */

use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use gpt_prompter::clipboard::SystemClipboard;
use gpt_prompter::config::{Args, Config};

fn main() -> ExitCode {
    // Parse command line arguments, exits with a usage error on bad input
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let config = Config::from_args(args);

    let stdout = io::stdout();
    match gpt_prompter::run(&config, &SystemClipboard, stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
