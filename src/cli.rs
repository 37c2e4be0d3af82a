use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "name2mtime")]
#[command(author, version, about, long_about = None)]
#[command(about = "Set file modification dates from the timestamps in their names")]
pub struct Args {
    /// Directory containing the files to update (not searched recursively)
    pub target_dir: PathBuf,

    /// Show the dates that would be set without modifying any file
    #[arg(short, long)]
    pub dry: bool,

    /// Do not ask for confirmation before modifying files
    #[arg(short, long)]
    pub yes: bool,

    /// Print the report as JSON instead of one line per file
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
