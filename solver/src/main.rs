use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::builder::PossibleValuesParser;
use clap::Parser;
use strum::VariantNames;

use wordpath::parser::read_queries;
use wordpath::{CellReuse, QueryRunner, SearchLimits, SearchOptions};

mod logging;

/// Find every path spelling each word along adjacent cells of a letter grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file: `<height> <width>`, the grid rows, then a line of words, repeated per query
    input: PathBuf,

    /// Whether a path may use a grid cell more than once
    #[arg(long, default_value_t = CellReuse::Allow.to_string(), value_parser = PossibleValuesParser::new(CellReuse::VARIANTS))]
    cell_reuse: String,

    /// Longest word to search for
    #[arg(long, default_value_t = SearchLimits::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Give up on a word after visiting this many partial paths
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Run queries on multiple threads
    #[arg(long)]
    parallel: bool,

    /// Omit the `Query N:` line before each query's results
    #[arg(long)]
    no_headers: bool,

    /// Log at debug level (also enabled by WORDPATH_DEBUG)
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.debug || std::env::var("WORDPATH_DEBUG").is_ok());

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let queries = read_queries(&cli.input)?;

    let options = SearchOptions {
        cell_reuse: cli.cell_reuse.parse::<CellReuse>()?,
        limits: SearchLimits {
            max_depth: cli.max_depth,
            max_nodes: cli.max_nodes,
        },
    };
    log::info!("searching {} queries, cell reuse: {}", queries.len(), options.cell_reuse);

    let started = Instant::now();
    let outputs = QueryRunner::new(options)
        .with_parallel(cli.parallel)
        .run_batch(&queries)?;
    log::info!("search took {:.3}s", started.elapsed().as_secs_f64());

    for (number, output) in outputs.iter().enumerate() {
        if !cli.no_headers {
            println!("Query {}:", number + 1);
        }
        for line in &output.lines {
            println!("{line}");
        }
    }

    Ok(())
}
