use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "xml-assert")]
#[command(about = "Assert semantic equality of XML documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Compare two XML files and fail when they differ semantically.
    Assert(AssertArgs),
    /// Compare two XML files and report differences without failing.
    Diff(DiffArgs),
    /// Show the parsed structure of a single XML file.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct AssertArgs {
    pub expected: PathBuf,
    pub actual: PathBuf,
    /// Load comparison switches from a TOML profile.
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Count empty elements instead of pruning them.
    #[arg(long)]
    pub no_ignore_empty_nodes: bool,
    /// Count namespace prefix respelling as a difference.
    #[arg(long)]
    pub no_ignore_prefixes: bool,
    /// Count sibling reordering as a difference.
    #[arg(long)]
    pub no_ignore_order: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    pub expected: PathBuf,
    pub actual: PathBuf,
    #[arg(long)]
    pub profile: Option<PathBuf>,
    #[arg(long)]
    pub no_ignore_empty_nodes: bool,
    #[arg(long)]
    pub no_ignore_prefixes: bool,
    #[arg(long)]
    pub no_ignore_order: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long)]
    pub summary: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub file: PathBuf,
    #[arg(long, default_value_t = 3)]
    pub depth: usize,
    /// Apply empty-node pruning before rendering.
    #[arg(long)]
    pub prune_empty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
