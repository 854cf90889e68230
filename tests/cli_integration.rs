use assert_cmd::Command;
use regex::Regex;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/logic.json";

struct Run {
    success: bool,
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

fn normalize_output(text: &str) -> String {
    // Redact the crate version so snapshots survive releases.
    let re_version = Regex::new(r#""version":\s*"[^"]+""#).unwrap();
    let out = re_version.replace_all(text, r#""version": "<VERSION>""#);

    // Redact tmp-ish paths if they ever appear.
    let re_tmp_unix = Regex::new(r"/tmp/[^\s]+").unwrap();
    let out = re_tmp_unix.replace_all(&out, "<TMP>");

    out.to_string()
}

fn run_logic_mutant(args: &[&str]) -> Run {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("logic-mutant"));
    cmd.args(args)
        .env("NO_COLOR", "1")
        .env("RUST_BACKTRACE", "0");

    let output = cmd.output().expect("command should run");

    Run {
        success: output.status.success(),
        code: output.status.code(),
        stdout: normalize_output(&String::from_utf8_lossy(&output.stdout)),
        stderr: normalize_output(&String::from_utf8_lossy(&output.stderr)),
    }
}

#[test]
fn help_lists_subcommands() {
    let run = run_logic_mutant(&["--help"]);

    assert!(run.success);
    assert!(run.stdout.contains("list"));
    assert!(run.stdout.contains("mutate"));
}

#[test]
fn mutate_fixture_lists_every_mutant() {
    let run = run_logic_mutant(&["mutate", FIXTURE]);
    assert!(run.success, "stderr: {}", run.stderr);

    let mutant_lines: Vec<&str> = run
        .stdout
        .lines()
        .filter(|l| l.starts_with('#'))
        .collect();

    insta::assert_snapshot!(mutant_lines.join("\n"), @r#"
    #1 tests/fixtures/logic.json:2 [11..19] OrthogonalReplacement/LogicalAndSingleSubExprNegation: "$b && $c" -> "!$b && $c"
    #2 tests/fixtures/logic.json:2 [11..19] OrthogonalReplacement/LogicalAndSingleSubExprNegation: "$b && $c" -> "$b && !$c"
    #3 tests/fixtures/logic.json:2 [11..19] OrthogonalReplacement/LogicalAndAllSubExprNegation: "$b && $c" -> "!$b && !$c"
    #4 tests/fixtures/logic.json:2 [11..19] OrthogonalReplacement/LogicalAndNegation: "$b && $c" -> "!($b && $c)"
    #5 tests/fixtures/logic.json:3 [21..62] OrthogonalReplacement/IfAlwaysFalse: "if ($x || $y || !$z) {\n    return true;\n}" -> "if (false) {\n    return true;\n}"
    #6 tests/fixtures/logic.json:3 [25..40] OrthogonalReplacement/LogicalOrSingleSubExprNegation: "$x || $y || !$z" -> "!$x || $y || !$z"
    #7 tests/fixtures/logic.json:3 [25..40] OrthogonalReplacement/LogicalOrSingleSubExprNegation: "$x || $y || !$z" -> "$x || !$y || !$z"
    #8 tests/fixtures/logic.json:3 [25..40] OrthogonalReplacement/LogicalOrSingleSubExprNegation: "$x || $y || !$z" -> "$x || $y || $z"
    #9 tests/fixtures/logic.json:3 [25..40] OrthogonalReplacement/LogicalOrAllSubExprNegation: "$x || $y || !$z" -> "!$x || !$y || $z"
    #10 tests/fixtures/logic.json:3 [25..40] OrthogonalReplacement/LogicalOrNegation: "$x || $y || !$z" -> "!($x || $y || !$z)"
    "#);

    assert!(run.stdout.contains("--- 10 mutants generated ---"));
}

#[test]
fn mutate_limit_and_filter() {
    let run = run_logic_mutant(&[
        "mutate",
        FIXTURE,
        "--mutator",
        "LogicalOrSingleSubExprNegation",
        "--limit",
        "2",
    ]);
    assert!(run.success, "stderr: {}", run.stderr);

    let ids: Vec<&str> = run
        .stdout
        .lines()
        .filter_map(|l| l.strip_prefix('#'))
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(ids, ["1", "2"]);
    assert!(run.stdout.contains(r#""!$x || $y || !$z""#));
    assert!(run.stdout.contains(r#""$x || !$y || !$z""#));
}

#[test]
fn mutate_verbose_prints_whole_file() {
    let run = run_logic_mutant(&["mutate", FIXTURE, "-m", "IfAlwaysFalse", "-v"]);
    assert!(run.success, "stderr: {}", run.stderr);

    assert!(run.stdout.contains("$a = $b && $c;\nif (false) {\n    return true;\n}"));
}

#[test]
fn mutate_json_report() {
    let run = run_logic_mutant(&["mutate", FIXTURE, "--json", "--limit", "3"]);
    assert!(run.success, "stderr: {}", run.stderr);

    let report: serde_json::Value = serde_json::from_str(&run.stdout).expect("stdout is json");

    assert_eq!(report["tool"], "logic-mutant");
    assert_eq!(report["version"], "<VERSION>");
    assert_eq!(report["limit"], 3);
    assert_eq!(report["mutants"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["mutants"][2]["operator"]["name"], "LogicalAndAllSubExprNegation");
    assert_eq!(report["mutants"][2]["mutated_snippet"], "!$b && !$c");
    assert!(report.get("error").is_none());

    // Human output moves to stderr in JSON mode.
    assert!(run.stderr.contains("logic-mutant: mutate"));
}

#[test]
fn mutate_without_candidates() {
    let run = run_logic_mutant(&["mutate", "tests/fixtures/always_false.json"]);
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("no mutants generated"));
}

#[test]
fn unknown_mutator_fails() {
    let run = run_logic_mutant(&["mutate", FIXTURE, "--mutator", "Nope"]);

    assert_eq!(run.code, Some(1));
    assert!(run.stderr.contains("unknown mutator `Nope`"));
}

#[test]
fn missing_tree_fails_with_json_error() {
    let run = run_logic_mutant(&["mutate", "tests/fixtures/missing.json", "--json"]);

    assert_eq!(run.code, Some(1));
    let report: serde_json::Value = serde_json::from_str(&run.stdout).expect("stdout is json");
    let error = report["error"].as_str().expect("error message");
    assert!(error.contains("missing.json"), "{error}");
}

#[test]
fn mutate_writes_output_dir() {
    let td = TempDir::new().expect("TempDir should create");
    let out_dir = td.path().join("results");
    let out_arg = out_dir.to_str().expect("utf-8 temp path");

    let run = run_logic_mutant(&["mutate", FIXTURE, "--out", out_arg, "--limit", "4"]);
    assert!(run.success, "stderr: {}", run.stderr);

    let mutants = fs::read_to_string(out_dir.join("mutants.json")).expect("mutants.json");
    let mutants: serde_json::Value = serde_json::from_str(&mutants).expect("valid json");
    assert_eq!(mutants.as_array().map(Vec::len), Some(4));

    let log = fs::read_to_string(out_dir.join("log")).expect("log");
    assert!(log.contains("limit: 4\n"));
    assert!(log.contains("generated: 4\n"));

    let diff = fs::read_to_string(out_dir.join("diff/000004.diff")).expect("fourth diff");
    assert!(diff.contains("- $a = $b && $c;\n+ $a = !($b && $c);\n"));
    assert!(diff.contains("  if ($x || $y || !$z) {"));
}

#[test]
fn list_json_catalog() {
    let run = run_logic_mutant(&["list", "--json"]);
    assert!(run.success, "stderr: {}", run.stderr);

    let entries: serde_json::Value = serde_json::from_str(&run.stdout).expect("stdout is json");
    let names: Vec<&str> = entries
        .as_array()
        .expect("array of rules")
        .iter()
        .filter_map(|e| e["name"].as_str())
        .collect();

    assert_eq!(
        names,
        [
            "LogicalAndSingleSubExprNegation",
            "LogicalOrSingleSubExprNegation",
            "LogicalAndAllSubExprNegation",
            "LogicalOrAllSubExprNegation",
            "LogicalAndNegation",
            "LogicalOrNegation",
            "IfAlwaysFalse",
        ]
    );
    assert_eq!(entries[0]["category"], "OrthogonalReplacement");
}
