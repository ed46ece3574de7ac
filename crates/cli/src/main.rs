use std::{env::args_os, process::ExitCode};

use afdko_cli::{ProcessLauncher, cli::Cli, wrapper};
use clap::Parser;
use env_logger::init;

fn main() -> ExitCode {
    init();

    let mut args = args_os();
    let invoked_as = args.next().as_deref().and_then(wrapper::invoked_as);
    let launcher = ProcessLauncher::from_env();

    let result = match invoked_as {
        Some(wrapper) => wrapper::run(wrapper, &args.collect::<Vec<_>>(), &launcher),
        None => Cli::parse().run(&launcher),
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    })
}
