use console::{Term, style};
use std::{env, fmt::Display, path::Path};

use crate::mutant::Mutant;
use crate::report::format_mutant;

/// Small UI helper:
/// - normal mode: human output to stdout, errors to stderr
/// - `--json` mode: ALL human output to stderr (stdout stays machine-readable JSON)
/// - fancy styling only on a real TTY and when NO_COLOR/CI are not set
#[derive(Debug, Clone)]
pub struct Ui {
    out: Term,
    err: Term,
    fancy: bool,
    enabled: bool,

    // Number of mutant lines printed so far; feeds the closing summary.
    mutants_shown: u64,
}

impl Ui {
    pub fn new(json: bool) -> Self {
        let out = if json { Term::stderr() } else { Term::stdout() };
        let err = Term::stderr();

        // Fancy output must only activate when the actual stream used for human output is a TTY.
        let out_is_tty = out.is_term();

        let no_color = env::var_os("NO_COLOR").is_some();
        let in_ci = env::var_os("CI").is_some();

        let fancy = out_is_tty && !no_color && !in_ci;

        Self {
            out,
            err,
            fancy,
            enabled: true,
            mutants_shown: 0,
        }
    }

    /// Useful for unit tests to avoid noisy output.
    #[cfg(test)]
    pub fn silent() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            fancy: false,
            enabled: false,
            mutants_shown: 0,
        }
    }

    fn write_out(&self, s: &str) {
        if self.enabled {
            let _ = self.out.write_line(s);
        }
    }

    fn write_err(&self, s: &str) {
        if self.enabled {
            let _ = self.err.write_line(s);
        }
    }

    pub fn line(&self, msg: impl Display) {
        self.write_out(&msg.to_string());
    }

    pub fn title(&self, msg: impl Display) {
        let s = msg.to_string();
        if self.fancy {
            self.write_out(&style(s).bold().to_string());
        } else {
            self.write_out(&s);
        }
    }

    pub fn warn(&self, msg: impl Display) {
        let s = msg.to_string();
        if self.fancy {
            self.write_err(&style(s).yellow().to_string());
        } else {
            self.write_err(&s);
        }
    }

    pub fn error(&self, msg: impl Display) {
        let s = msg.to_string();
        if self.fancy {
            self.write_err(&style(s).red().bold().to_string());
        } else {
            self.write_err(&s);
        }
    }

    /// One line per generated mutant.
    ///
    /// In non-fancy mode this is exactly [`format_mutant`], so piped output
    /// and snapshots stay stable.
    pub fn mutant(&mut self, file: &Path, m: &Mutant) {
        self.mutants_shown = self.mutants_shown.saturating_add(1);

        if !self.fancy {
            self.line(format_mutant(file, m));
            return;
        }

        let op = format!("{:?}/{}", m.operator.category, m.operator.name);
        let location = match m.span {
            Some(span) => format!("{}:{}", file.display(), span.line),
            None => file.display().to_string(),
        };

        self.line(format!(
            "{id} {location} {op}: {orig} {arrow} {mutated}",
            id = style(format!("#{}", m.id)).cyan().bold(),
            op = style(op).dim(),
            orig = style(&m.original_snippet).red(),
            arrow = style("->").dim(),
            mutated = style(&m.mutated_snippet).green(),
        ));
    }

    pub fn mutants_shown(&self) -> u64 {
        self.mutants_shown
    }

    #[allow(dead_code)]
    pub fn is_fancy(&self) -> bool {
        self.fancy && self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutant::MutationOperator;
    use crate::mutator::MutatorCategory;

    #[test]
    fn is_fancy_requires_fancy_and_enabled() {
        let base = Ui::silent();

        let mut a = base.clone();
        a.fancy = true;
        a.enabled = false;
        assert!(!a.is_fancy());

        let mut b = base.clone();
        b.fancy = false;
        b.enabled = true;
        assert!(!b.is_fancy());

        let mut c = base.clone();
        c.fancy = true;
        c.enabled = true;
        assert!(c.is_fancy());
    }

    #[test]
    fn mutant_lines_are_counted() {
        let m = Mutant {
            id: 1,
            operator: MutationOperator {
                category: MutatorCategory::OrthogonalReplacement,
                name: "IfAlwaysFalse".to_string(),
            },
            span: None,
            original_snippet: "if ($a) {\n}".to_string(),
            mutated_snippet: "if (false) {\n}".to_string(),
        };

        let mut ui = Ui::silent();
        ui.mutant(Path::new("a.json"), &m);
        ui.mutant(Path::new("a.json"), &m);

        assert_eq!(ui.mutants_shown(), 2);
    }
}
