use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use crawl_extract::{ExtractSettings, DEFAULT_MAX_DOCUMENT_BYTES};
use crawl_logging::{LevelFilter, LogDestination};

#[derive(Debug, Parser)]
#[command(name = "crawlkit", version, about = "Extract page content and canonical URL keys")]
pub struct Cli {
    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(
        long,
        global = true,
        env = "CRAWLKIT_LOG",
        default_value = "warn",
        value_parser = parse_level
    )]
    pub log_level: LevelFilter,

    /// Also write logs to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical comparison key of each URL.
    Normalize(NormalizeArgs),
    /// Print heading, lead paragraph, links and images of an HTML page.
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// URLs to turn into keys.
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Print each key only the first time it is seen.
    #[arg(long)]
    pub unique: bool,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// URL the page was fetched from; relative references resolve against it.
    #[arg(long)]
    pub url: String,

    /// HTML file to read; stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Charset label overriding detection (e.g. "utf-8", "iso-8859-1").
    #[arg(long)]
    pub charset: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Fail on markup the HTML parser had to repair.
    #[arg(long)]
    pub strict: bool,

    /// Reject documents larger than this many bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_DOCUMENT_BYTES)]
    pub max_bytes: usize,

    /// Keep at most this many links and images each.
    #[arg(long)]
    pub max_urls: Option<usize>,
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level {value:?}"))
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) => LogDestination::Both(path.clone()),
            None => LogDestination::Terminal,
        }
    }
}

impl ExtractArgs {
    pub fn settings(&self) -> ExtractSettings {
        ExtractSettings {
            max_document_bytes: self.max_bytes,
            strict_markup: self.strict,
            max_urls: self.max_urls,
        }
    }
}
