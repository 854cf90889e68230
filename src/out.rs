use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::discover::Discovered;
use crate::mutant::Mutant;
use crate::parent::SyntaxTree;
use crate::report::MutationReport;

/// Write `mutants.json` containing all generated mutants.
pub fn write_mutants_json(out_dir: &Path, mutants: &[Mutant]) -> Result<()> {
    let path = out_dir.join("mutants.json");
    write_pretty_json(&path, mutants)
}

/// Write one `diff/000001.diff` file per mutant.
///
/// Each diff shows the whole rendered file before and after the mutant was
/// spliced in, line by line.
pub fn write_diff_dir(out_dir: &Path, tree: &SyntaxTree, found: &[Discovered]) -> Result<()> {
    let diff_dir = out_dir.join("diff");
    fs::create_dir_all(&diff_dir)
        .with_context(|| format!("failed to create diff dir {:?}", diff_dir))?;

    let original = tree.root().to_string();

    for d in found {
        let m = &d.mutant;
        let mutated = match d.mutated_tree(tree) {
            Some(root) => root.to_string(),
            None => m.mutated_snippet.clone(),
        };

        let op = format!("{:?}/{}", m.operator.category, m.operator.name);
        let mut content = format!("--- original\n+++ mutant #{}\n@@ {op}\n", m.id);
        content.push_str(&line_diff(&original, &mutated));

        let path = diff_dir.join(format!("{:06}.diff", m.id));
        fs::write(&path, content).with_context(|| format!("failed to write {:?}", path))?;
    }

    Ok(())
}

/// Write a stable `log` file (no timestamps) describing the run.
pub fn write_log(out_dir: &Path, report: &MutationReport) -> Result<()> {
    let path = out_dir.join("log");

    let mut lines = Vec::new();
    lines.push(format!("tool: {}", report.tool));
    lines.push(format!("version: {}", report.version));
    lines.push(format!("source: {}", report.source.display()));
    lines.push(format!("mutators: {}", report.mutators.join(", ")));
    if let Some(limit) = report.limit {
        lines.push(format!("limit: {limit}"));
    }
    lines.push(format!("generated: {}", report.mutants.len()));
    if let Some(err) = &report.error {
        lines.push(format!("error: {err}"));
    }

    let content = lines.join("\n") + "\n";
    fs::write(&path, content).with_context(|| format!("failed to write {:?}", path))?;
    Ok(())
}

/// Minimal diff: shared prefix and suffix lines as context, the rest as
/// removed and added lines.
fn line_diff(before: &str, after: &str) -> String {
    let old: Vec<&str> = before.lines().collect();
    let new: Vec<&str> = after.lines().collect();

    let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = String::new();
    for line in &old[..prefix] {
        out.push_str(&format!("  {line}\n"));
    }
    for line in &old[prefix..old.len() - suffix] {
        out.push_str(&format!("- {line}\n"));
    }
    for line in &new[prefix..new.len() - suffix] {
        out.push_str(&format!("+ {line}\n"));
    }
    for line in &old[old.len() - suffix..] {
        out.push_str(&format!("  {line}\n"));
    }
    out
}

// `?Sized` allows passing unsized values such as slices (e.g. `&[Mutant]` where `T = [Mutant]`).
fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize json")?;
    fs::write(path, json).with_context(|| format!("failed to write {:?}", path))?;
    Ok(())
}
