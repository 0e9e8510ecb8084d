#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{path::PathBuf, time::Duration};

use bar_sat::{config::Config, context::Context, reports::Report};
use clap::Parser;

mod read;

/// Determines whether a formula is satisfiable or unsatisfiable.
///
/// The formula file holds one clause to each line, e.g. `x1 + x3bar + x8bar`, where `bar` marks a negated variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The formula file to solve
    file: PathBuf,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    stats: bool,

    /// Stop the solve after some number of seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// Stop the solve after some number of conflicts
    #[arg(long)]
    conflict_limit: Option<usize>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
    };

    #[cfg(feature = "log")]
    {
        let level = match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }

    let config = Config {
        time_limit: args.time_limit.map(Duration::from_secs),
        conflict_limit: args.conflict_limit,
    };
    let mut the_context = Context::from_config(config);

    if let Err(e) = read::read_formula(&args.file, &mut the_context) {
        eprintln!("{e}");
        std::process::exit(2);
    }

    println!("Given clauses:");
    for (index, clause) in the_context.clause_db.original_clauses().enumerate() {
        println!("Clause {}: {}", index + 1, the_context.atom_db.clause_string(clause));
    }

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Solve error: {e}");
            std::process::exit(2);
        }
    };

    let exit_code = match report {
        Report::Satisfiable => {
            println!("Satisfying assignment:");
            for (name, value) in the_context.model() {
                println!("{name}: {value}");
            }
            0
        }

        Report::Unsatisfiable => {
            println!("Formula is unsatisfiable.");
            1
        }

        Report::Unknown => {
            println!("Satisfiability unknown.");
            3
        }
    };

    if args.stats {
        let counters = &the_context.counters;
        println!("Decisions:    {}", counters.total_decisions);
        println!("Conflicts:    {}", counters.total_conflicts);
        println!("Propagations: {}", counters.total_propagations);
        println!("Iterations:   {}", counters.total_iterations);
        println!("Learned:      {}", the_context.clause_db.addition_count());
        println!("Time:         {:.2?}", counters.time);
    }

    std::process::exit(exit_code);
}
