use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gitversion",
    version,
    about = "Derive a version string from git tags",
    after_help = "\
OUTPUT:
  v1.2.0                   HEAD is tagged v1.2.0
  v1.2.0.dev5              5 commits after v1.2.0
  v1.2.0.dirty             tagged, with uncommitted changes
  v1.2.0.dev5.dirty        both
  v0.0.0-abc1234           no reachable tag, short hash of HEAD

EXIT CODES:
  0  Success
  1  Error (git missing, not a repository, no commits)"
)]
pub struct Cli {
    /// Run git inside this directory
    #[arg(short = 'C', long, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// git executable to invoke
    #[arg(long, value_name = "PATH", default_value = "git")]
    pub git: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Log the git queries to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
