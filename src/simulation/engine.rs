use crate::cli::Args;
use crate::error::Result;
use crate::plateau::Plateau;
use crate::rover::{Command, Rover};
use crate::simulation::collision::validate_position;
use crate::simulation::parser::{parse_plateau_line, parse_rover_line, validate_command_line};
use colored::Colorize;
use std::io::{BufRead, Lines, Write};
use std::time::{Duration, Instant};

/// Lifecycle of one mission run. A simulator only exists once initialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initialized,
    Processed,
    ResultsEmitted,
}

/// A rover together with the commands it was given, in declaration order
#[derive(Clone, Debug)]
pub struct RoverProgram {
    pub rover: Rover,
    pub commands: String,
}

/// Drives one mission: load the plateau and rovers, replay commands, report
pub struct Simulator {
    plateau: Plateau,
    programs: Vec<RoverProgram>,
    phase: Phase,
    suppress_events: bool,
}

impl Simulator {
    /// Read the plateau line and every rover/command pair from `input`.
    ///
    /// Rovers are read until the input ends or a blank rover line is found.
    /// Each start square is validated and claimed before the next rover is read.
    pub fn initialize<R: BufRead>(input: R, args: &Args) -> Result<Self> {
        let mut lines = input.lines();

        let plateau_line = next_line(&mut lines)?;
        let mut plateau = parse_plateau_line(plateau_line.as_deref())?;

        let mut programs: Vec<RoverProgram> = Vec::new();
        let mut ordinal = 1usize;
        while let Some(rover_line) = next_line(&mut lines)?.filter(|l| !l.is_empty()) {
            let command_line = next_line(&mut lines)?;

            let rover = parse_rover_line(&rover_line, ordinal)?;
            validate_position(&plateau, rover.position(), ordinal)?;
            let commands = validate_command_line(command_line, ordinal)?;

            plateau.add_unavailable(rover.position());
            log_deployed(args.suppress_events, ordinal, &rover);
            programs.push(RoverProgram { rover, commands });
            ordinal += 1;
        }

        Ok(Self {
            plateau,
            programs,
            phase: Phase::Initialized,
            suppress_events: args.suppress_events,
        })
    }

    /// Replay every rover's commands, one rover at a time, in declaration order.
    ///
    /// Stops at the first error. Moves already applied, including those of
    /// earlier rovers, stay in place.
    pub fn process_rover_commands(&mut self) -> Result<Duration> {
        let sim_start = Instant::now();

        for (idx, program) in self.programs.iter_mut().enumerate() {
            let ordinal = idx + 1;
            let rover = &mut program.rover;

            for c in program.commands.chars() {
                let old_position = rover.position();
                if rover.execute(c)? == Command::Move {
                    let new_position = rover.position();
                    validate_position(&self.plateau, new_position, ordinal)?;
                    self.plateau.update_unavailable(old_position, new_position);
                }
            }

            log_finished(self.suppress_events, ordinal, rover);
        }

        self.phase = Phase::Processed;
        Ok(sim_start.elapsed())
    }

    /// Write one `<x> <y> <HEADING>` line per rover to `out`
    pub fn emit_results<W: Write>(&mut self, out: &mut W) -> Result<()> {
        for program in &self.programs {
            writeln!(out, "{}", program.rover)?;
        }
        out.flush()?;
        self.phase = Phase::ResultsEmitted;
        Ok(())
    }

    /// Final rover states as output lines, without writing them anywhere
    pub fn results(&self) -> Vec<String> {
        self.programs.iter().map(|p| p.rover.to_string()).collect()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn plateau(&self) -> &Plateau {
        &self.plateau
    }

    #[inline]
    pub fn programs(&self) -> &[RoverProgram] {
        &self.programs
    }

    /// Print simulation summary to stderr
    pub fn print_summary(&self, args: &Args, simulation_time: Duration) {
        if args.suppress_events {
            return;
        }
        let commands: usize = self.programs.iter().map(|p| p.commands.len()).sum();
        eprintln!(
            "\n{}\n{} {:.3} ms {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("rovers={}", self.programs.len()).cyan(),
            format!("commands={}", commands).cyan(),
            format!("plateau={}", self.plateau).cyan(),
        );
    }
}

fn next_line<B: BufRead>(lines: &mut Lines<B>) -> Result<Option<String>> {
    Ok(lines.next().transpose()?)
}

#[inline]
fn log_deployed(suppress_events: bool, ordinal: usize, rover: &Rover) {
    if suppress_events {
        return;
    }
    eprintln!(
        "{} {} {}",
        "🛰️ ".blue(),
        format!("rover #{}", ordinal).bright_blue(),
        format!("deployed at {}", rover).dimmed()
    );
}

#[inline]
fn log_finished(suppress_events: bool, ordinal: usize, rover: &Rover) {
    if suppress_events {
        return;
    }
    eprintln!(
        "{} {} {}",
        "🏁".green(),
        format!("rover #{}", ordinal).bright_green(),
        format!("finished at {}", rover).yellow()
    );
}
