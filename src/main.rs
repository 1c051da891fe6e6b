//! # incroot CLI Entry Point
//!
//! Parses CLI arguments with clap, merges `incroot.toml` defaults, and runs
//! the pipeline: walk the tree, scan every source file for `#include`
//! directives, resolve the headers to include roots, render the `-I` flags,
//! and materialize the completion config.
//!
//! Degraded paths (unreadable files, unresolved headers, template failures)
//! produce warnings, never a non-zero exit: worst case is fewer discovered
//! roots or no generated config.

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};

use incroot::config;
use incroot::flags::{self, FlagStyle};
use incroot::ide;
use incroot::resolve;
use incroot::scan::{self, HeaderCounts};
use incroot::template;
use incroot::ui;
use incroot::walk;

#[derive(Parser)]
#[command(name = "incroot")]
#[command(about = "Include-root discovery for C/C++ editor tooling", version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Project root to scan
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Print discovered files, extracted headers, and unresolved headers
    #[arg(short, long)]
    verbose: bool,

    /// Skip files whose path contains this substring (repeatable)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Flag layout in the generated config
    #[arg(long, value_enum)]
    format: Option<FlagStyle>,

    /// Completion template location (downloaded when absent)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Generated config filename
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the generated flags without writing any config
    #[arg(long)]
    dry_run: bool,

    /// Also generate .vscode/c_cpp_properties.json
    #[arg(long)]
    vscode: bool,
}

/// Effective options after merging CLI flags, `incroot.toml`, and defaults.
struct Options {
    root: PathBuf,
    verbose: bool,
    excludes: Vec<String>,
    format: FlagStyle,
    template: Option<PathBuf>,
    output: PathBuf,
    dry_run: bool,
    vscode: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let opts = merge_options(cli);
    run(&opts)
}

/// CLI wins over `incroot.toml`, which wins over built-in defaults. A
/// malformed config file warns and falls back to defaults.
fn merge_options(cli: Cli) -> Options {
    let root = cli.path.unwrap_or_else(|| PathBuf::from("."));

    let project = match config::load(&root) {
        Ok(project) => project.unwrap_or_default(),
        Err(err) => {
            println!("{} Ignoring project config: {:#}", "!".yellow(), err);
            config::ProjectConfig::default()
        }
    };
    let scan_cfg = project.scan.unwrap_or_default();
    let output_cfg = project.output.unwrap_or_default();

    let excludes = if !cli.exclude.is_empty() {
        cli.exclude
    } else {
        scan_cfg
            .exclude
            .unwrap_or_else(|| vec!["third_party".to_string()])
    };

    let output = cli.output.unwrap_or_else(|| {
        PathBuf::from(
            output_cfg
                .file
                .unwrap_or_else(|| template::OUTPUT_FILE.to_string()),
        )
    });

    Options {
        verbose: cli.verbose,
        excludes,
        format: cli.format.or(output_cfg.format).unwrap_or_default(),
        template: cli
            .template
            .or_else(|| output_cfg.template.map(|t| root.join(t))),
        output,
        dry_run: cli.dry_run,
        vscode: cli.vscode || output_cfg.vscode.unwrap_or(false),
        root,
    }
}

fn run(opts: &Options) -> Result<()> {
    println!("{} Scanning {} ...", "🔍".cyan(), opts.root.display());

    let files = walk::find_sources(&opts.root, opts.verbose);

    let mut counts = HeaderCounts::new();
    let mut scanned = 0usize;
    for path in &files {
        if opts.excludes.iter().any(|pat| path.contains(pat.as_str())) {
            continue;
        }
        if opts.verbose {
            println!("[{path}]");
        }
        match scan::scan_file(Path::new(path), &mut counts, opts.verbose) {
            Ok(()) => scanned += 1,
            Err(err) => {
                if opts.verbose {
                    println!("{} {:#}", "!".yellow(), err);
                }
            }
        }
    }

    let roots = resolve::resolve_roots(&counts, &files, opts.verbose);

    println!("Total header: {}", counts.len());
    if opts.verbose {
        let directives: usize = counts.values().sum();
        let mut table = ui::Table::new(&["Metric", "Count"]);
        table.add_row(vec!["Files found".dimmed().to_string(), files.len().to_string()]);
        table.add_row(vec!["Files scanned".dimmed().to_string(), scanned.to_string()]);
        table.add_row(vec![
            "Include directives".dimmed().to_string(),
            directives.to_string(),
        ]);
        table.add_row(vec![
            "Distinct headers".green().to_string(),
            counts.len().to_string(),
        ]);
        table.add_row(vec![
            "Include roots".green().to_string(),
            roots.len().to_string(),
        ]);
        table.print();
    }

    let rendered = flags::render_flags(&roots, opts.format);
    println!("Gen Include:\n{rendered}");

    if opts.dry_run {
        println!("{} Dry run, nothing written.", "!".yellow());
        return Ok(());
    }

    if let Err(err) = template::materialize(opts.template.as_deref(), &opts.output, &rendered) {
        println!("{} Skipping config generation: {:#}", "!".yellow(), err);
    }

    if opts.vscode {
        if let Err(err) = ide::generate_vscode_config(&opts.root, &roots) {
            println!("{} Skipping VSCode config: {:#}", "!".yellow(), err);
        }
    }

    Ok(())
}
