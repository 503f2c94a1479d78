use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use bacon_score::{record_parser, Config, QueryDriver};

#[derive(Parser, Debug)]
#[command(name = "bacon_score")]
#[command(about = "Bacon numbers from a movie/actor dataset; actor names are read from stdin")]
struct Args {
    /// Print the chain of actors and movies behind each score
    #[arg(short = 'l')]
    list: bool,

    /// Reference actor to measure from (overrides the config file)
    #[arg(long)]
    anchor: Option<String>,

    /// TOML config file (defaults to $BACON_CONFIG, then ./bacon.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dataset of "Movie: <title>" headers each followed by actor lines
    dataset: PathBuf,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(anchor) = args.anchor {
        config.anchor = anchor;
    }
    config.list_path |= args.list;
    config.validate()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let file = File::open(&args.dataset)
        .with_context(|| format!("Could not open dataset: {}", args.dataset.display()))?;
    let graph = record_parser::parse_dataset(BufReader::new(file))
        .with_context(|| format!("Could not load dataset: {}", args.dataset.display()))?;

    let mut driver = QueryDriver::new(&graph, &config.anchor, config.list_path);
    let report = driver.run(
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    info!("answered {} queries, {} unresolved", report.answered, report.unresolved);

    // any unknown name fails the run, the rest of the stream is still answered
    if report.unresolved > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
