use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal report
    Terminal,
    /// JSON on stdout
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "contentscope")]
#[command(
    about = "Content strategy analyzer: search intent, quality scoring, topic clusters",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a JSON request envelope from stdin or a file
    Run {
        /// Read the request from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify search queries by intent
    Classify {
        /// Queries to classify
        #[arg(required = true)]
        queries: Vec<String>,

        /// Also print the intent distribution over the query set
        #[arg(long)]
        distribution: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score content quality from a file
    Check {
        /// Content file to score (markdown or plain text)
        file: PathBuf,

        /// Page title metadata
        #[arg(long)]
        title: Option<String>,

        /// Meta description metadata
        #[arg(long)]
        meta_description: Option<String>,

        /// Target keyword for SEO scoring
        #[arg(short, long)]
        keyword: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
