use clap::Parser;

/// CLI arguments for the rover simulation
#[derive(Parser, Debug, Clone)]
#[command(name = "mars_rover", about = "🛰️  Mars rover squad simulator")]
pub struct Args {
    /// Path to the mission input file
    #[arg(short = 'i', long = "input", default_value = "input.dat")]
    pub input: String,

    /// Suppress deployment logs and the summary (results are still printed)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    /// Arguments for running a mission without any event output
    pub fn quiet() -> Self {
        Self {
            input: String::new(),
            suppress_events: true,
        }
    }
}
