use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// YAML file supplying project name, version, and std_version
    /// (also settable via FEATPROBE_CONFIG)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Pin the modern variant regardless of detection
    #[arg(long, conflicts_with = "force_fallback")]
    pub force_modern: bool,
    /// Pin the fallback variant regardless of detection
    #[arg(long)]
    pub force_fallback: bool,
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
