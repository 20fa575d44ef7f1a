use boxsearch::{
    search::{
        search_engines::{SearchEngineName, SearchResult, TerminationCondition},
        validate, SearchProblem, Verbosity,
    },
    sokoban::{
        heuristics::{ConfigError, HeuristicConfig, HeuristicName},
        Level, LevelError, SokobanProblem,
    },
};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode, time::Duration};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Solve a box-pushing level with one of the search engines.
struct Cli {
    #[arg(help = "The level file")]
    level: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::Astar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic to use, ignored by uninformed engines",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::BoxPushing
    )]
    heuristic_name: HeuristicName,
    #[arg(
        help = "A TOML file with heuristic settings",
        short = 'c',
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "Stop searching after this long, e.g. 30s or 5min",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Stop searching once the process uses this many megabytes",
        short = 'm',
        long = "memory-limit",
        id = "MEMORY_LIMIT"
    )]
    memory_limit: Option<usize>,
    #[arg(
        help = "Stop searching after expanding this many nodes",
        short = 'x',
        long = "expansion-limit",
        id = "EXPANSION_LIMIT"
    )]
    expansion_limit: Option<usize>,
    #[arg(help = "Write the plan to this file", short = 'o', long = "output", id = "OUTPUT")]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", long = "colour")]
    colour: bool,
}

#[derive(Debug, Error)]
enum SolverError {
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write plan file {path}")]
    WritePlan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("the engine returned an invalid plan")]
    InvalidPlan(#[from] boxsearch::search::ValidationError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match solve(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                error!("caused by: {}", cause);
                source = cause.source();
            }
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether a plan was found.
fn solve(cli: Cli) -> Result<bool, SolverError> {
    let config = match &cli.config {
        Some(path) => HeuristicConfig::from_path(path)?,
        None => HeuristicConfig::default(),
    };
    info!(?config);

    let level = Level::from_path(&cli.level)?;
    info!(
        width = level.layout.width(),
        height = level.layout.height(),
        crates = level.initial_state.crates.len(),
        goals = level.layout.goals().len(),
    );
    let mut problem = SokobanProblem::from_level(level);
    let initial_state = problem.initial_state().clone();

    if !cli.search_engine_name.is_informed() && cli.heuristic_name != HeuristicName::default() {
        warn!(
            engine = %cli.search_engine_name,
            heuristic = %cli.heuristic_name,
            "the engine does not use a heuristic"
        );
    }
    let mut heuristic = cli.heuristic_name.create(&config);
    let mut termination =
        TerminationCondition::new(cli.time_limit, cli.memory_limit, cli.expansion_limit);

    let (result, statistics) = cli.search_engine_name.search(
        &mut problem,
        &initial_state,
        &mut *heuristic,
        &mut termination,
    );
    info!(
        memo_entries = problem.memo().len(),
        memo_hits = problem.memo().hits()
    );
    println!(
        "Expanded {} nodes, generated {}, pruned {}, dead ends {}, peak frontier {} in {:.3}s",
        statistics.expanded_nodes(),
        statistics.generated_nodes(),
        statistics.pruned_nodes(),
        statistics.deadend_nodes(),
        statistics.peak_frontier_size(),
        statistics.elapsed().as_secs_f64()
    );

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            validate(&problem, &initial_state, &plan)?;
            info!("plan is valid");

            let rendered = plan.render("");
            let pushes = problem.count_pushes(&plan);
            let cost: f64 = problem
                .trajectory(&plan)
                .iter()
                .zip(plan.steps())
                .map(|(state, direction)| problem.cost(state, direction))
                .sum();
            info!(plan_length = plan.len(), pushes, cost);

            println!("Plan found:");
            println!("{}", rendered);
            println!("Plan length: {}", plan.len());
            println!("Pushes: {}", pushes);

            if let Some(path) = cli.plan {
                std::fs::write(&path, format!("{}\n", rendered))
                    .map_err(|source| SolverError::WritePlan { path, source })?;
            }
            Ok(true)
        }
        result => {
            info!("no plan found");
            println!("No plan found: {:?}", result);
            Ok(false)
        }
    }
}
