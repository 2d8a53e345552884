//! DMP Awards - Main Entry Point
//!
//! Usage:
//!     dmp-awards match --plan plan.json --candidates awards.json
//!     dmp-awards run --plans plans.json --awards awards.json --output registered.jsonl

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dmp_awards::config::MatchSettings;
use dmp_awards::files::{load_catalog, load_plan};
use dmp_awards::{scoring, RunConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dmp-awards")]
#[command(about = "Link data management plans to the awards that funded them")]
#[command(version)]
struct Cli {
    /// Log level (debug, info, warn, error); RUST_LOG overrides
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match one plan against a set of award records and print the result
    Match {
        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Award records (JSON array or award search response)
        #[arg(long)]
        candidates: PathBuf,

        /// Only consider awards whose titles share a keyword with the plan title
        #[arg(long)]
        search: bool,

        #[command(flatten)]
        matching: MatchArgs,
    },

    /// Match every unprocessed plan and register the awards found
    Run {
        /// JSON array of plans
        #[arg(long)]
        plans: PathBuf,

        /// Award records (JSON array or award search response)
        #[arg(long)]
        awards: PathBuf,

        /// Processed plan list [env: DMP_AWARDS_PROCESSED]
        #[arg(long)]
        processed: Option<PathBuf>,

        /// Registration output (JSON lines); stdout if omitted
        #[arg(long)]
        output: Option<PathBuf>,

        /// Match and log without registering
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        matching: MatchArgs,
    },
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Award display URL prefix [env: DMP_AWARDS_BASE_URL]
    #[arg(long)]
    base_url: Option<String>,

    /// Stopword file, one word per line [env: DMP_AWARDS_STOPWORDS]
    #[arg(long)]
    stopwords: Option<PathBuf>,
}

impl MatchArgs {
    fn apply(self, settings: &mut MatchSettings) {
        if let Some(url) = self.base_url {
            settings.award_base_url = url;
        }
        if let Some(path) = self.stopwords {
            settings.stopwords = Some(path);
        }
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    dmp_awards::tracing::init_with_filter(&cli.log_level);

    match cli.command {
        Command::Match {
            plan,
            candidates,
            search,
            matching,
        } => {
            let mut settings = MatchSettings::default();
            settings.apply_env(env_lookup);
            matching.apply(&mut settings);

            let ranker = settings.build_ranker()?;
            let plan = load_plan(&plan)?;
            let catalog = load_catalog(&candidates)?;

            let award = if search {
                scoring::match_plan(&ranker, &plan, &catalog)
            } else {
                ranker.find_best_scored(scoring::score_all(&ranker, &plan, catalog.awards()))
            };
            println!("{}", serde_json::to_string_pretty(&award)?);
        }
        Command::Run {
            plans,
            awards,
            processed,
            output,
            dry_run,
            matching,
        } => {
            let mut config = RunConfig::new(plans, awards);
            config.apply_env(env_lookup);
            matching.apply(&mut config.matching);
            if let Some(path) = processed {
                config.processed = path;
            }
            config.output = output;
            config.dry_run = dry_run;

            info!("dmp-awards {}", env!("CARGO_PKG_VERSION"));
            let summary = dmp_awards::run(&config)?;
            if summary.failed > 0 {
                return Err(format!("{} registrations failed", summary.failed).into());
            }
        }
    }

    Ok(())
}
