use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};
use uncomment_engine::{RunStats, UncommentOptions, Uncommenter};

const ROOT_ENV: &str = "UNCOMMENT_ROOT";

#[derive(Parser)]
#[command(name = "uncomment")]
#[command(about = "Revive TypeScript files that were disabled by commenting out every line", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory to scan (overrides UNCOMMENT_ROOT; defaults to the current directory)
    root: Option<PathBuf>,

    /// Print run statistics as JSON instead of per-file lines
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long)]
    quiet: bool,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || cli.json {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let root = resolve_root(cli.root);
    let root = root
        .canonicalize()
        .with_context(|| format!("Invalid root path {}", root.display()))?;

    let uncommenter = Uncommenter::new(UncommentOptions::new(root))?;
    let json = cli.json;
    let stats = uncommenter
        .run_with(|path| {
            if !json {
                print_uncommenting(path);
            }
        })
        .context("Uncomment run failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_summary(&stats);
    }

    Ok(())
}

fn resolve_root(arg: Option<PathBuf>) -> PathBuf {
    arg.or_else(|| env::var_os(ROOT_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn print_uncommenting(path: &Path) {
    println!("Uncommenting: {}", path.display());
}

fn print_summary(stats: &RunStats) {
    println!("Total files uncommented: {}", stats.files_uncommented);
}
