//! cf-harvest CLI
//!
//! Crawls the contest listing, filters contests by division and problems by
//! short code, and writes matched problems to a CSV file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cf_harvest::{
    error::Result,
    models::{CodeLetter, Config, Division, FilterConfig},
    pipeline,
};

/// cf-harvest - Codeforces contest problem harvester
#[derive(Parser, Debug)]
#[command(name = "cf-harvest", version, about = "Codeforces contest problem harvester")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl contests and write matched problems to a CSV file
    Harvest {
        /// Output CSV path (overwritten if it exists)
        #[arg(short, long)]
        output: PathBuf,

        /// Stop after this many matched problems
        #[arg(short, long)]
        limit: u32,

        /// Contest division filter
        #[arg(short, long, value_enum)]
        division: Division,

        /// Problem code letter filter
        #[arg(long, value_enum, ignore_case = true)]
        code: CodeLetter,

        /// Safety bound on listing pages scanned (overrides config)
        #[arg(long)]
        max_pages: Option<u32>,
    },

    /// Print the latest contests from the listing
    Latest {
        /// Number of contests to collect
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    config.validate()?;

    match cli.command {
        Command::Harvest {
            output,
            limit,
            division,
            code,
            max_pages,
        } => {
            if max_pages.is_some() {
                config.crawler.max_pages = max_pages;
            }
            let filter = FilterConfig::new(division, code)?;

            log::info!(
                "Finding problems: pattern={}, codes={:?}, limit={}, output={}",
                filter.contest_pattern.as_str(),
                filter.problem_codes,
                limit,
                output.display()
            );

            let outcome = pipeline::run_harvest(&config, filter, limit, &output).await?;

            log::info!(
                "Harvest complete: {} problems from {} contests across {} pages in {}s",
                outcome.matched,
                outcome.contests_matched,
                outcome.pages_scanned,
                outcome.duration().num_seconds()
            );
            if outcome.skipped_untitled > 0 {
                log::warn!(
                    "{} problem pages had no parsable title and were skipped",
                    outcome.skipped_untitled
                );
            }
        }

        Command::Latest { count } => {
            let contests = pipeline::run_latest(&config, count).await?;
            for contest in &contests {
                println!("{}\t{}", contest.name, contest.link);
            }
        }

        Command::Validate => {
            log::info!("Configuration OK");
        }
    }

    Ok(())
}
