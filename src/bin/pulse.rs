//! Pulse CLI — engagement analytics over a seeded synthetic dataset.
//!
//! Usage:
//!   pulse run [--records N] [--seed S] [--format text|json]
//!   pulse aggregate --field <name> [--records N] [--seed S]
//!   pulse describe [--records N] [--seed S]
//!   pulse correlate [--records N] [--seed S]

use clap::{Args, Parser, Subcommand};
use pulse::analysis::{aggregate, correlate, derive_engagement, null_counts, summarize};
use pulse::dataset::{Category, Field};
use pulse::generate::generate;
use pulse::pipeline::{run, RunOptions};
use pulse::report;

#[derive(Parser)]
#[command(
    name = "pulse",
    version,
    about = "Engagement analytics engine for synthetic social-media datasets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Generator options shared by every subcommand
#[derive(Args)]
struct DatasetArgs {
    /// Number of records to generate
    #[arg(long, default_value_t = 1000)]
    records: usize,
    /// Generator seed (fixed seed, identical dataset)
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Categories to draw from, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = Category::ALL)]
    categories: Vec<Category>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis pipeline and print the report
    Run {
        #[command(flatten)]
        dataset: DatasetArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Average a field by category, sorted descending
    Aggregate {
        #[command(flatten)]
        dataset: DatasetArgs,
        /// Field to average (likes, shares, comments, engagement)
        #[arg(long)]
        field: String,
    },
    /// Print descriptive statistics and null counts
    Describe {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
    /// Print the Pearson correlation matrix of the base fields
    Correlate {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
}

fn cmd_run(args: &DatasetArgs, format: &str) -> i32 {
    let options = RunOptions::new()
        .with_records(args.records)
        .with_seed(args.seed)
        .with_categories(args.categories.clone());
    let analysis = match run(&options) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match format {
        "text" => {
            print!("{}", report::render_text(&analysis));
            0
        }
        "json" => match report::render_json(&analysis) {
            Ok(json) => {
                println!("{}", json);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        other => {
            eprintln!("error: unknown format '{}' (expected text or json)", other);
            1
        }
    }
}

fn cmd_aggregate(args: &DatasetArgs, field: &str) -> i32 {
    let field: Field = match field.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let mut dataset = generate(args.records, &args.categories, args.seed);
    if field == Field::Engagement {
        derive_engagement(&mut dataset);
    }
    match aggregate(&dataset, field) {
        Ok(means) => {
            let title = format!("Average {} by category", field);
            print!("{}", report::render_means(&title, &means));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_describe(args: &DatasetArgs) -> i32 {
    let dataset = generate(args.records, &args.categories, args.seed);
    match summarize(&dataset) {
        Ok(describe) => {
            let nulls = null_counts(&dataset);
            print!("{}", report::render_summary(&describe, &nulls));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_correlate(args: &DatasetArgs) -> i32 {
    let dataset = generate(args.records, &args.categories, args.seed);
    match correlate(&dataset, &Field::BASE) {
        Ok(matrix) => {
            print!("{}", report::render_matrix(&matrix));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Run { dataset, format } => cmd_run(&dataset, &format),
        Commands::Aggregate { dataset, field } => cmd_aggregate(&dataset, &field),
        Commands::Describe { dataset } => cmd_describe(&dataset),
        Commands::Correlate { dataset } => cmd_correlate(&dataset),
    };
    std::process::exit(code);
}
