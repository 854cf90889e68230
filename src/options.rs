use std::path::PathBuf;

/// Configuration for a `mutate` run, derived from the CLI.
#[derive(Debug, Clone)]
pub struct Options {
    /// JSON syntax tree to mutate.
    pub tree_path: PathBuf,

    /// Rules to enable; empty means all of them.
    pub mutators: Vec<String>,

    /// Optional limit for the number of mutants to generate.
    pub mutant_limit: Option<usize>,

    /// When true, emit JSON output instead of a human-readable listing.
    pub json_output: bool,

    /// Print the whole mutated file for each mutant.
    pub verbose: bool,

    /// Directory to write `mutants.json`, `log` and per-mutant diffs into.
    pub out_dir: Option<PathBuf>,
}

impl Options {
    /// Construct an `Options` instance with default values.
    pub fn new(tree_path: PathBuf) -> Self {
        Self {
            tree_path,
            mutators: Vec::new(),
            mutant_limit: None,
            json_output: false,
            verbose: false,
            out_dir: None,
        }
    }
}
