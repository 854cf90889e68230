mod cli;
mod discover;
mod mutant;
mod mutator;
mod node;
mod options;
mod out;
mod parent;
mod render;
mod report;
mod source;
mod span;
mod splice;
mod ui;

/// Entry point for the `logic-mutant` binary.
fn main() -> anyhow::Result<()> {
    cli::run()
}
