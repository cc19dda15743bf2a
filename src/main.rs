// Command-line driver: solves every position of the reference game with one
// algorithm and prints a report line per position.

use std::io::Write;
use std::process;

use clap::Parser;
use log::info;

use othello_solver::game_repr::{PrincipalVariation, PASS, REFERENCE_PV};
use othello_solver::search::{
    run_along_pv, Algorithm, SearchConfig, TestCondition, DEFAULT_MAX_ENTRIES,
    DEFAULT_STORE_THRESHOLD,
};
use othello_solver::SolverResult;

#[derive(Parser, Debug)]
#[command(author, version, about = "Exact endgame solver for 6x6 Othello", long_about = None)]
struct Cli {
    /// Search algorithm: 1 negamax, 2 alpha-beta, 3 scout, 4 negascout (or its name)
    #[arg(default_value = "1")]
    algorithm: Algorithm,

    /// Enable the transposition table
    #[arg(long)]
    tt: bool,

    /// Only cache positions with more than this many empty cells
    #[arg(long, default_value_t = DEFAULT_STORE_THRESHOLD)]
    tt_threshold: u32,

    /// Maximum number of cached positions per side to move
    #[arg(long, default_value_t = DEFAULT_MAX_ENTRIES)]
    tt_max_entries: usize,

    /// Scout test succeeds on equality (value >= bound) instead of value > bound
    #[arg(long)]
    inclusive_test: bool,

    /// Only solve this many positions, counting back from the end of the game
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print the plays and the final position of the variation
    #[arg(long)]
    show_pv: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        let condition = if self.inclusive_test {
            TestCondition::Inclusive
        } else {
            TestCondition::Strict
        };

        SearchConfig::default()
            .with_tt(self.tt)
            .with_store_threshold(self.tt_threshold)
            .with_max_entries(self.tt_max_entries)
            .with_test_condition(condition)
    }
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );

    builder
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .target(env_logger::Target::Stderr);

    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = run(&cli) {
        log::error!("Fatal error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> SolverResult<()> {
    print!("Extracting principal variation (PV) with {} plays ... ", REFERENCE_PV.len());
    let pv = PrincipalVariation::reference()?;
    println!("done!");

    if cli.show_pv {
        print_pv(&pv);
    }

    let config = cli.search_config();
    println!(
        "Algorithm: {}{}",
        cli.algorithm,
        if config.use_tt { " w/ transposition table" } else { "" }
    );
    info!("{}: {}", cli.algorithm, cli.algorithm.description());

    println!("Moving along PV:");
    let results = run_along_pv(cli.algorithm, config, &pv, cli.limit, |result| {
        println!("{result}");
    })?;

    let expanded: u64 = results.iter().map(|r| r.expanded).sum();
    let generated: u64 = results.iter().map(|r| r.generated).sum();
    info!(
        "solved {} positions: #expanded={}, #generated={}",
        results.len(),
        expanded,
        generated
    );

    Ok(())
}

fn print_pv(pv: &PrincipalVariation) {
    let plays: Vec<String> = pv
        .moves()
        .iter()
        .map(|&cell| if cell == PASS { "pass".to_string() } else { cell.to_string() })
        .collect();
    println!("PV: {}", plays.join(" "));

    if let Some(last) = pv.positions().first() {
        println!("Final position (value {}):", last.value());
        print!("{last}");
    }
}
