use std::process;

use anyhow::Result;

use cmdbench::clock::MonotonicClock;
use cmdbench::display;
use cmdbench::errors::BenchError;
use cmdbench::parse;
use cmdbench::runner;

fn run() -> Result<()> {
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    let config = parse::parse_args(&tokens)?;

    let clock = MonotonicClock::new();
    let reports = runner::run_benchmark(&config, &clock)?;

    print!("{}", display::format_report(config.iterations, &reports));
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // Usage errors go to stdout with the help text; runtime failures
        // go to stderr. Both exit 1.
        match err.downcast_ref::<BenchError>() {
            Some(bench_err) if bench_err.is_usage() => {
                println!("{}", bench_err);
                print!("{}", display::usage());
            }
            _ => eprintln!("{}", err),
        }
        process::exit(1);
    }
}
