mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use config::ConfigMerger;
use sepfix_core::adapters::{FsSourceStore, FsSourceTree, FsWritePort};
use sepfix_core::{FixSettings, run_fix, write_run_artifacts};
use sepfix_render::outcome_line;
use sepfix_types::report::ToolInfo;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "sepfix",
    version,
    about = "Repair mangled separator banners in exported source trees."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Repair files in place and report every fix.
    Fix(ScanArgs),
    /// Scan and report without writing to any source file.
    Check(ScanArgs),
}

#[derive(Debug, Parser)]
struct ScanArgs {
    /// Files or directories to scan (default: current directory).
    #[arg(default_value = ".")]
    paths: Vec<Utf8PathBuf>,

    /// File extension to include when walking directories (repeatable).
    #[arg(long = "ext")]
    extensions: Vec<String>,

    /// Directory name to skip at any depth (repeatable).
    #[arg(long = "skip")]
    skip_dirs: Vec<String>,

    /// Output directory for run artifacts (report.json, report.md, patch.diff).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// Config file to load (default: sepfix.toml in the current directory).
    #[arg(long)]
    config: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Fix(args) => cmd_scan(args, false),
        Command::Check(args) => cmd_scan(args, true),
    }
}

fn cmd_scan(args: ScanArgs, dry_run: bool) -> anyhow::Result<ExitCode> {
    let file_config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::load_or_default(Utf8Path::new(".")).context("load sepfix.toml config")?,
    };
    let merged = ConfigMerger::new(file_config).merge_scan_args(&args.extensions, &args.skip_dirs);

    debug!(
        "merged config: extensions={:?}, skip_dirs={:?}",
        merged.extensions, merged.skip_dirs
    );

    let settings = FixSettings {
        paths: args.paths,
        extensions: merged.extensions,
        skip_dirs: merged.skip_dirs,
        dry_run,
    };

    for target in &settings.paths {
        info!("scanning {}", target);
    }

    let tree = FsSourceTree::new(settings.extensions.clone(), settings.skip_dirs.clone());
    let outcome = run_fix(&settings, &tree, &FsSourceStore, tool_info())?;

    for record in &outcome.report.files {
        println!("{}", outcome_line(record));
    }

    if let Some(out_dir) = &args.out_dir {
        write_run_artifacts(&outcome, out_dir, &FsWritePort)
            .with_context(|| format!("write artifacts to {}", out_dir))?;
        info!("wrote run artifacts to {}", out_dir);
    }

    if outcome.files_failed {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::from(0))
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "sepfix".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}
