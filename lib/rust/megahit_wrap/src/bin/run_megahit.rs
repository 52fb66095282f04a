//! run_megahit
#![deny(missing_docs)]

use clap::{CommandFactory, Parser};
use megahit_wrap::config::{RunArgs, RunConfig};
use megahit_wrap::errors::{exit_code, is_usage_error};
use megahit_wrap::logging::init_logging;
use megahit_wrap::utils::{print_error_chain, set_env_columns};
use std::process::ExitCode;

fn main() -> ExitCode {
    set_env_columns();
    let args = RunArgs::parse();

    let result = RunConfig::from_env(args).and_then(|config| {
        init_logging(config.debug);
        log::debug!("{config:?}");
        megahit_wrap::run(&config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error_chain(&err);
            if is_usage_error(&err) {
                eprintln!();
                eprintln!("{}", RunArgs::command().render_usage());
                eprintln!("For more information, try '--help'.");
            }
            exit_code(&err)
        }
    }
}
