use std::{process::exit, time::Instant};

use clap::Parser;

use levdist::calc::{Calculator, EPSILON};
use levdist::error;
use levdist::report::{self, builder};
use levdist::types::config::{Config, configuration};
use levdist::types::{Algorithm, CostModel, Measurement};

/// inputs longer than this make the naive evaluators call tree explode, see
/// [Calculator::distance_naive]
const NAIVE_GUARD: usize = 16;

/// Compare weighted edit distance evaluators on a pair of strings: the cost of turning the first
/// string into the second and how long each evaluator takes to find it.
#[derive(clap::Parser)]
#[command(about, version, long_about=None)]
struct Cli {
    /// instruct levdist to ignore the configuration, if specified
    #[arg(short, long)]
    ignore_config: bool,

    /// string to transform
    a: String,

    /// string to transform [a] into
    b: String,

    /// path to the configuration
    #[arg(short = 'c', long, default_value = "levdist.lua")]
    config: String,

    /// disable stdout/stderr output
    #[arg(short = 's', long)]
    silent: bool,

    /// evaluators to run, all of them by default
    #[arg(short = 'e', long)]
    #[clap(value_enum)]
    evaluator: Option<Vec<Algorithm>>,

    /// override the configured insertion cost
    #[arg(long)]
    add_cost: Option<f64>,

    /// override the configured deletion cost
    #[arg(long)]
    remove_cost: Option<f64>,

    /// override the configured substitution cost
    #[arg(long)]
    change_cost: Option<f64>,

    /// print the measurements as pretty printed json
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Cli::parse();

    let mut out = builder::Builder::default();

    let mut config = Config::default();

    if !args.ignore_config {
        // lua defined here because it would be dropped at the end of configuration()
        let lua = mlua::Lua::new();
        match configuration(&lua, &args.config) {
            Ok(conf) => config = conf,
            Err(err) => {
                if !args.silent {
                    error::warn(&mut out, &err);
                }
            }
        }
    }

    let defaults = config.costs.unwrap_or_default();
    let costs = match CostModel::new(
        args.add_cost.unwrap_or(defaults.add),
        args.remove_cost.unwrap_or(defaults.remove),
        args.change_cost.unwrap_or(defaults.change),
    ) {
        Ok(costs) => costs,
        Err(err) => {
            if !args.silent {
                error::err(&mut out, &err.to_string());
                print!("{}", out.string());
            }
            exit(1);
        }
    };

    let evaluators = args.evaluator.unwrap_or_else(|| {
        vec![Algorithm::Naive, Algorithm::Memoized, Algorithm::Iterative]
    });

    if !args.silent
        && evaluators.contains(&Algorithm::Naive)
        && args.a.len().min(args.b.len()) > NAIVE_GUARD
    {
        error::warn(
            &mut out,
            "inputs this long can keep the naive evaluator busy for a very long time, consider '-e iterative'",
        );
    }

    let mut calculator = Calculator::new(costs);
    let mut measurements = vec![];
    for evaluator in &evaluators {
        let start = Instant::now();
        let distance = match evaluator {
            Algorithm::Naive => calculator.distance_naive(&args.a, &args.b),
            Algorithm::Memoized => calculator.distance_memoized(&args.a, &args.b),
            Algorithm::Iterative => calculator.distance_iterative(&args.a, &args.b),
        };
        let measurement = Measurement {
            algorithm: *evaluator,
            distance,
            seconds: start.elapsed().as_secs_f64(),
        };
        if !args.silent && !args.json {
            report::measurement(&mut out, &measurement);
        }
        measurements.push(measurement);
    }

    let agree = measurements
        .windows(2)
        .all(|w| (w[0].distance - w[1].distance).abs() < EPSILON);

    if args.json {
        if !args.silent {
            println!(
                "{}",
                serde_json::to_string_pretty(&measurements).unwrap_or_default()
            );
        }
    } else if !args.silent {
        report::summary(&mut out, &measurements, agree);
        print!("{}", out.string());
    }

    if !agree {
        exit(1);
    }
}
