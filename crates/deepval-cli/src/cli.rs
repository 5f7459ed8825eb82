use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "deepval",
    about = "deepval — classify, clone, and deep-merge JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Overrides `output_format` from the config file
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to ./deepval.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the kind of a document's root and every predicate result
    Classify(ClassifyArgs),
    /// Deep-clone a document and print it
    Clone(CloneArgs),
    /// Deep-merge overlays into a base document, left to right
    Merge(MergeArgs),
}

#[derive(Args)]
pub struct ClassifyArgs {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct CloneArgs {
    pub path: PathBuf,
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args)]
pub struct MergeArgs {
    pub base: PathBuf,
    #[arg(required = true)]
    pub overlays: Vec<PathBuf>,
    /// Fail instead of ignoring a merge into a non-composite base
    #[arg(long)]
    pub strict: bool,
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(long)]
    pub compact: bool,
}
