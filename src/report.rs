use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::mutant::Mutant;
use crate::mutator::Definition;
use crate::mutator::registry::MutatorRegistry;

/// Machine-readable report for a `mutate` run.
///
/// In `--json` mode we print this to stdout as pretty JSON.
#[derive(Debug, Serialize)]
pub struct MutationReport {
    /// Tool name, stable across versions.
    pub tool: &'static str,

    /// Current crate version.
    pub version: &'static str,

    /// The syntax tree file used for this run.
    pub source: PathBuf,

    /// Names of the rules that were enabled.
    pub mutators: Vec<&'static str>,

    /// Limit applied to generation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Generated mutants, in id order.
    pub mutants: Vec<Mutant>,

    /// Optional high-level error message (for example an unreadable tree).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MutationReport {
    pub fn success(
        source: PathBuf,
        registry: &MutatorRegistry,
        limit: Option<usize>,
        mutants: Vec<Mutant>,
    ) -> Self {
        Self {
            tool: "logic-mutant",
            version: env!("CARGO_PKG_VERSION"),
            source,
            mutators: registry.iter().map(|m| m.name()).collect(),
            limit,
            mutants,
            error: None,
        }
    }

    pub fn failure(source: PathBuf, error: String) -> Self {
        Self {
            tool: "logic-mutant",
            version: env!("CARGO_PKG_VERSION"),
            source,
            mutators: Vec::new(),
            limit: None,
            mutants: Vec::new(),
            error: Some(error),
        }
    }
}

/// One rule in the `list` output.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,

    #[serde(flatten)]
    pub definition: Definition,
}

pub fn catalog(registry: &MutatorRegistry) -> Vec<CatalogEntry> {
    registry
        .iter()
        .map(|m| CatalogEntry {
            name: m.name(),
            definition: m.definition(),
        })
        .collect()
}

/// Format one mutant as a single, readable line.
///
/// Uses the line and byte range of the mutated node when the parser recorded
/// them.
pub fn format_mutant(file: &Path, m: &Mutant) -> String {
    let file = file.display();
    let location = match m.span {
        Some(span) => format!("{file}:{} [{}..{}]", span.line, span.start, span.end),
        None => file.to_string(),
    };

    format!(
        "#{id} {location} {category:?}/{name}: {orig:?} -> {mutated:?}",
        id = m.id,
        category = m.operator.category,
        name = m.operator.name,
        orig = m.original_snippet,
        mutated = m.mutated_snippet,
    )
}

/// Render a rule's catalog entry as an indented text block.
pub fn format_catalog_entry(entry: &CatalogEntry) -> String {
    let mut out = format!(
        "{} ({:?})\n    {}\n",
        entry.name, entry.definition.category, entry.definition.description
    );
    for line in entry.definition.diff.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
    out
}
