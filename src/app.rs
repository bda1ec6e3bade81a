use std::process::ExitCode;

use clap::Parser;

use self::arg::Args;
use self::arg::Command;

mod arg;
mod check;
mod format;
mod io;
mod logging;
mod model;
mod parse;

pub fn run() -> ExitCode {
    match run_impl() {
        Ok(exit_code) => exit_code,
        Err(error) => {
            tracing::error!(?error);
            eprintln!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run_impl() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    self::logging::set_up_logging(args.log_level, args.log_file.as_deref(), args.log_json)?;

    let exit_code = match args.command {
        Command::Parse(args) => {
            self::parse::parse(&args)?;
            ExitCode::SUCCESS
        }
        Command::Format(args) => {
            self::format::format(&args)?;
            ExitCode::SUCCESS
        }
        Command::Check(args) => self::check::check(&args)?,
    };

    Ok(exit_code)
}
