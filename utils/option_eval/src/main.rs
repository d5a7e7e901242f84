use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::*;
use log::LevelFilter;
use option::{AbsentError, O};
use option_eval::{Outcome, Report, Terminal, Transform, evaluate};

/// Evaluate an optional integer through a pipeline of container operations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Held value; omit to start from an absent container
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    value: Option<i64>,

    /// Transform applied with `map`, in order (repeatable)
    #[arg(short, long = "map", value_enum)]
    maps: Vec<Transform>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    terminal: Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        // Extracting from an absent container is a contract violation, not an I/O failure.
        let code = if e.downcast_ref::<AbsentError>().is_some() { 2 } else { 1 };
        std::process::exit(code);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<()> {
    let input = match args.value {
        Some(v) => O::present(v),
        None => O::absent(),
    };
    log::info!("evaluating {:?} with {} transform(s)", input, args.maps.len());

    let report = evaluate(input, &args.maps, &args.terminal)?;

    match args.format {
        Format::Text => print_report(&report),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn print_report(report: &Report) {
    println!("{}", "Option Evaluator".bold().blue());
    println!("{}", "================".blue());
    println!("  Input:     {}", report.input.yellow());
    println!("  Mapped:    {}", report.mapped.yellow());
    println!("  Operation: {}", report.operation.cyan());

    let result = match report.result {
        Outcome::Flag(true) => "present".green(),
        Outcome::Flag(false) => "absent".red(),
        Outcome::Value(v) => v.to_string().green(),
    };
    println!("  Result:    {}", result.bold());

    println!();
    println!("  {}", "Calls:".bold());
    println!("    map transforms: {}", report.map_calls);
    println!("    fallback:       {}", report.fallback_calls);
    println!("    terminal fn:    {}", report.fn_calls);
}
