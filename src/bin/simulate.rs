//! Batch Simulation Binary
//!
//! Plays n Monty Hall rounds and reports the win/lose table for the
//! stay and switch strategies.
//!
//! Options: -n, --trials <TRIALS> (default 100)

use clap::Parser;
use montyhall::simulation::Batch;

#[derive(Parser)]
#[command(about = "estimate Monty Hall stay/switch win rates by simulation")]
struct Args {
    /// number of rounds to play
    #[arg(short = 'n', long, default_value_t = montyhall::DEFAULT_TRIALS)]
    trials: usize,
}

fn main() {
    montyhall::log();
    let args = Args::parse();
    Batch::from(args.trials).run();
}
