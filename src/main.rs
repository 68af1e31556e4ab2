use std::process::ExitCode;

use clap::Parser;
use specimen_gen::Args;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = specimen_gen::run(&args) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
