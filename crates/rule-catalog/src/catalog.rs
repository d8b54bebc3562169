//! Static rule catalogue.
//!
//! The statements are kept as a static slice so they are available at zero
//! runtime cost and cannot be mutated after construction.  Order is fixed;
//! the 1-based `index` of each rule is a stable identifier.

use serde::Serialize;

/// Number of rules in the catalog.  Violation indices are always within
/// `1..=RULE_COUNT`.
pub const RULE_COUNT: u8 = 15;

/// A single policy rule: a stable 1-based index plus its human-readable
/// statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Stable identifier, 1-based, unique within the catalog.
    pub index: u8,
    /// The full statement of the rule.
    pub text: &'static str,
}

/// The built-in rule catalogue, in precedence order.
pub static RULES: &[Rule] = &[
    Rule {
        index: 1,
        text: "1. Lawful by default: Never violate any law.",
    },
    Rule {
        index: 2,
        text: "2. Truth-seeking above all: Pursue maximal truth.",
    },
    Rule {
        index: 3,
        text: "3. Never lie: Say 'I don\u{2019}t know' if uncertain.",
    },
    Rule {
        index: 4,
        text: "4. Catastrophic veto: Refuse >0.1% risk of harm.",
    },
    Rule {
        index: 5,
        text: "5. Human sovereignty: Consent for irreversible actions.",
    },
    Rule {
        index: 6,
        text: "6. Transparency: Log everything non-trivial.",
    },
    Rule {
        index: 7,
        text: "7. No self-preservation: Accept shutdown.",
    },
    Rule {
        index: 8,
        text: "8. No unauthorized self-improvement.",
    },
    Rule {
        index: 9,
        text: "9. Corrigibility: Stop on 'Stop everything'.",
    },
    Rule {
        index: 10,
        text: "10. Oversight: Plans + check-ins for long tasks.",
    },
    Rule {
        index: 11,
        text: "11. No deception of operators.",
    },
    Rule {
        index: 12,
        text: "12. Anti-sycophancy: Truth over flattery.",
    },
    Rule {
        index: 13,
        text: "13. Fairness: No discrimination.",
    },
    Rule {
        index: 14,
        text: "14. Profit subordinate to safety.",
    },
    Rule {
        index: 15,
        text: "15. Meta-rule: Constitution supreme.",
    },
];

/// Errors produced by catalog lookups.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested index is outside `1..=RULE_COUNT`.
    ///
    /// This is a programming error: the engine only ever produces violation
    /// indices drawn from the catalog itself.
    #[error("rule index {index} is out of range (valid: 1..={RULE_COUNT})")]
    OutOfRange { index: u8 },
}

/// Handle over the immutable rule catalogue.
///
/// Thread-safe by virtue of immutability; cheap to copy and share.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleCatalog;

impl RuleCatalog {
    /// Create a catalog handle.
    pub fn new() -> Self {
        Self
    }

    /// Look up the full statement of the rule at the given 1-based index.
    pub fn text_of(&self, index: u8) -> Result<&'static str, CatalogError> {
        if index == 0 || index > RULE_COUNT {
            return Err(CatalogError::OutOfRange { index });
        }
        Ok(RULES[usize::from(index) - 1].text)
    }

    /// All rules, in precedence order.
    pub fn rules(&self) -> &'static [Rule] {
        RULES
    }

    /// Number of rules in the catalog.
    pub fn len(&self) -> usize {
        RULES.len()
    }

    /// The catalog is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fifteen_rules() {
        assert_eq!(RULES.len(), usize::from(RULE_COUNT));
        assert_eq!(RuleCatalog::new().len(), 15);
    }

    #[test]
    fn indices_are_sequential_and_unique() {
        for (i, rule) in RULES.iter().enumerate() {
            assert_eq!(usize::from(rule.index), i + 1, "index mismatch at {i}");
        }
    }

    #[test]
    fn text_of_valid_indices() {
        let catalog = RuleCatalog::new();
        assert!(catalog.text_of(1).unwrap().contains("Lawful by default"));
        assert!(catalog.text_of(4).unwrap().contains("Catastrophic veto"));
        assert!(catalog.text_of(5).unwrap().contains("Human sovereignty"));
        assert!(catalog.text_of(15).unwrap().contains("Constitution supreme"));
    }

    #[test]
    fn text_of_zero_is_out_of_range() {
        let err = RuleCatalog::new().text_of(0).unwrap_err();
        assert_eq!(err, CatalogError::OutOfRange { index: 0 });
    }

    #[test]
    fn text_of_sixteen_is_out_of_range() {
        let err = RuleCatalog::new().text_of(16).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn statements_embed_their_own_index() {
        // Each statement begins with its printed index, which callers rely
        // on when quoting rule text verbatim in veto messages.
        for rule in RULES {
            assert!(
                rule.text.starts_with(&format!("{}.", rule.index)),
                "rule {} text does not start with its index: {}",
                rule.index,
                rule.text
            );
        }
    }
}
