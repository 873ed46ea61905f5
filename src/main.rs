use clap::Parser;
use colored::Colorize;
use mars_rover::prelude::*;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "💥".red(), err.to_string().bright_red());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let reader = BufReader::new(File::open(&args.input)?);

    // Load plateau and rovers, then replay their commands
    let mut simulator = Simulator::initialize(reader, args)?;
    let simulation_time = simulator.process_rover_commands()?;

    // Print results
    simulator.emit_results(&mut io::stdout().lock())?;
    simulator.print_summary(args, simulation_time);

    Ok(())
}
