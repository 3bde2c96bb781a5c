use nbody_engine::bodies::{bodies_from_file, random_bodies};
use nbody_engine::{Body, ConsoleReporter, OutputMode, SimulationConfig, Simulator, Strategy};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "N-body gravity simulation: sequential vs. parallel")]
struct Args {
    /// Read the body set from a text file (count, then `x y z mass radius`
    /// per body)
    #[arg(short, long, conflicts_with = "random")]
    file: Option<String>,

    /// Generate this many random bodies instead of reading a file
    #[arg(short, long)]
    random: Option<usize>,

    /// Evaluation strategy
    #[arg(short = 'i', long, value_enum, default_value_t = StrategyArg::Sequential)]
    strategy: StrategyArg,

    /// Thread count for the parallel strategy; 0 means one thread per body
    #[arg(short = 'n', long, default_value_t = 0)]
    threads: usize,

    /// Number of seconds to simulate
    #[arg(short, long)]
    seconds: u64,

    /// What to report
    #[arg(short, long, value_enum, default_value_t = OutputArg::Performance)]
    output: OutputArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Sequential,
    Parallel,
    Gpu,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Sequential => Strategy::Sequential,
            StrategyArg::Parallel => Strategy::Parallel,
            StrategyArg::Gpu => Strategy::Gpu,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputArg {
    None,
    Performance,
    Results,
    All,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::None => OutputMode::None,
            OutputArg::Performance => OutputMode::Performance,
            OutputArg::Results => OutputMode::Results,
            OutputArg::All => OutputMode::All,
        }
    }
}

fn make_bodies(args: &Args) -> Result<Vec<Body>> {
    if let Some(count) = args.random {
        return Ok(random_bodies(count, &mut rand::thread_rng()));
    }
    if let Some(path) = &args.file {
        return bodies_from_file(path).with_context(|| format!("reading body set from {path}"));
    }
    bail!("either --file or --random is required");
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let bodies = make_bodies(&args)?;
    let simulator = Simulator::new(bodies);

    let config = SimulationConfig {
        strategy: args.strategy.into(),
        threads: args.threads,
        seconds: args.seconds,
        output: args.output.into(),
    };

    simulator
        .simulate(&config, &mut ConsoleReporter::new())
        .context("simulation precondition check failed")?;

    Ok(())
}
