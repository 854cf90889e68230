use anyhow::{Result, bail};

use super::boolean::{AllSubExprNegation, ConditionNegation, SingleSubExprNegation};
use super::chain::ChainKind;
use super::conditional::IfAlwaysFalse;
use super::Mutator;

/// Ordered set of enabled rules.
///
/// Rules are consulted in registration order, which is also the order their
/// mutants are reported in for a given node.
pub struct MutatorRegistry {
    mutators: Vec<Box<dyn Mutator>>,
}

impl MutatorRegistry {
    /// Registry with every known rule.
    pub fn all() -> Self {
        Self {
            mutators: vec![
                Box::new(SingleSubExprNegation::new(ChainKind::And)),
                Box::new(SingleSubExprNegation::new(ChainKind::Or)),
                Box::new(AllSubExprNegation::new(ChainKind::And)),
                Box::new(AllSubExprNegation::new(ChainKind::Or)),
                Box::new(ConditionNegation::new(ChainKind::And)),
                Box::new(ConditionNegation::new(ChainKind::Or)),
                Box::new(IfAlwaysFalse),
            ],
        }
    }

    /// Registry restricted to the named rules, in catalog order.
    ///
    /// An empty list enables every rule.
    pub fn from_enabled(names: &[String]) -> Result<Self> {
        let all = Self::all();
        if names.is_empty() {
            return Ok(all);
        }

        for name in names {
            if !all.iter().any(|m| m.name() == name) {
                let known: Vec<&str> = all.iter().map(|m| m.name()).collect();
                bail!("unknown mutator `{name}` (known: {})", known.join(", "));
            }
        }

        let mutators = all
            .mutators
            .into_iter()
            .filter(|m| names.iter().any(|n| n == m.name()))
            .collect();

        Ok(Self { mutators })
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Mutator> {
        self.mutators.iter().map(|m| &**m as &dyn Mutator)
    }

    pub fn len(&self) -> usize {
        self.mutators.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let registry = MutatorRegistry::all();
        let mut names: Vec<&str> = registry.iter().map(|m| m.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let names = vec!["IfAlwaysFalse".to_string(), "LogicalAndNegation".to_string()];
        let registry = MutatorRegistry::from_enabled(&names).expect("known names");

        let got: Vec<&str> = registry.iter().map(|m| m.name()).collect();
        assert_eq!(got, ["LogicalAndNegation", "IfAlwaysFalse"]);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = MutatorRegistry::from_enabled(&["Nope".to_string()])
            .err()
            .expect("unknown name should fail");
        assert!(err.to_string().starts_with("unknown mutator `Nope`"));
    }
}
