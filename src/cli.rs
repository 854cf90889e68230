use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::discover::{Discovered, discover_mutants};
use crate::mutant::Mutant;
use crate::mutator::registry::MutatorRegistry;
use crate::options::Options;
use crate::out::{write_diff_dir, write_log, write_mutants_json};
use crate::report::{MutationReport, catalog, format_catalog_entry};
use crate::source::SourceTree;
use crate::ui::Ui;

const EXIT_OK: i32 = 0;
const EXIT_ERROR: i32 = 1;

/// Top-level CLI arguments for the `logic-mutant` binary.
#[derive(Debug, Parser)]
#[command(
    name = "logic-mutant",
    version,
    about = "Boolean-logic and conditional mutation rules over parsed syntax trees"
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands supported by `logic-mutant`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available mutation rules.
    List {
        /// Emit the catalog as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate mutants for a JSON syntax tree.
    Mutate {
        /// Path to the syntax tree, as dumped by the parser.
        tree: PathBuf,

        /// Enable only this rule (repeatable). Defaults to all rules.
        #[arg(long = "mutator", short = 'm', value_name = "NAME")]
        mutators: Vec<String>,

        /// Generate only the first N mutants (deterministic order).
        #[arg(long)]
        limit: Option<usize>,

        /// Emit a machine-readable JSON report to stdout.
        #[arg(long)]
        json: bool,

        /// Also print the whole mutated file for each mutant.
        #[arg(long, short = 'v')]
        verbose: bool,

        /// Write `mutants.json`, `log` and per-mutant diffs into this directory.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

fn print_json_and_exit(report: &MutationReport, exit_code: i32) -> ! {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize report: {e}"),
    }
    std::process::exit(exit_code);
}

/// Parse CLI arguments and dispatch the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List { json } => list(json),

        Command::Mutate {
            tree,
            mutators,
            limit,
            json,
            verbose,
            out,
        } => {
            let mut options = Options::new(tree);
            options.mutators = mutators;
            options.mutant_limit = limit;
            options.json_output = json;
            options.verbose = verbose;
            options.out_dir = out;

            mutate(&options)
        }
    }
}

fn list(json: bool) -> Result<()> {
    let registry = MutatorRegistry::all();
    let entries = catalog(&registry);

    if json {
        let text = serde_json::to_string_pretty(&entries).context("serialize catalog")?;
        println!("{text}");
        return Ok(());
    }

    let ui = Ui::new(false);
    ui.title(format!("logic-mutant: {} mutators", entries.len()));
    for entry in &entries {
        ui.line(format_catalog_entry(entry).trim_end());
    }

    Ok(())
}

fn mutate(options: &Options) -> Result<()> {
    let json = options.json_output;
    let mut ui = Ui::new(json);
    let path = options.tree_path.clone();

    let registry = match MutatorRegistry::from_enabled(&options.mutators) {
        Ok(r) => r,
        Err(e) => {
            if json {
                print_json_and_exit(&MutationReport::failure(path, e.to_string()), EXIT_ERROR);
            }
            ui.error(format!("invalid mutator selection: {e}"));
            return Err(e);
        }
    };

    let source = match SourceTree::load(&path) {
        Ok(s) => s,
        Err(e) => {
            if json {
                print_json_and_exit(&MutationReport::failure(path, format!("{e:#}")), EXIT_ERROR);
            }
            ui.error(format!("failed to load syntax tree at {:?}: {e:#}", path));
            return Err(e);
        }
    };

    ui.title("logic-mutant: mutate");
    ui.line(format!("tree: {:?}", source.path));
    ui.line(format!("mutators enabled: {}", registry.len()));

    if options.mutant_limit == Some(0) {
        ui.line("mutant limit is 0, exiting");
        if json {
            let report = MutationReport::success(path, &registry, Some(0), Vec::new());
            print_json_and_exit(&report, EXIT_OK);
        }
        return Ok(());
    }

    let discovered = discover_mutants(&source.tree, &registry);
    let found: Vec<Discovered> = match options.mutant_limit {
        Some(limit) => discovered.take(limit).collect(),
        None => discovered.collect(),
    };

    for d in &found {
        ui.mutant(&source.path, &d.mutant);

        if options.verbose {
            match d.mutated_tree(&source.tree) {
                Some(root) => ui.line(root),
                None => ui.warn(format!("mutant {} could not be spliced", d.mutant.id)),
            }
        }
    }

    if found.is_empty() {
        ui.line("no mutants generated");
    } else {
        ui.line(format!("--- {} mutants generated ---", ui.mutants_shown()));
    }

    let mutants: Vec<Mutant> = found.iter().map(|d| d.mutant.clone()).collect();
    let report = MutationReport::success(path, &registry, options.mutant_limit, mutants);

    if let Some(out_dir) = &options.out_dir {
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create output dir {:?}", out_dir))?;
        write_mutants_json(out_dir, &report.mutants)?;
        write_diff_dir(out_dir, &source.tree, &found)?;
        write_log(out_dir, &report)?;
        ui.line(format!("wrote results to {}", out_dir.display()));
    }

    if json {
        print_json_and_exit(&report, EXIT_OK);
    }

    Ok(())
}
