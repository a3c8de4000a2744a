//! Candidate company-name extraction
//!
//! An ordered list of pattern rules, evaluated first-match-wins. For the
//! matching rule, captured groups are scanned in reverse declaration order
//! and the first group whose trimmed content is longer than 2 characters
//! wins. A rule that matches without producing a valid group does not stop
//! the scan; the next rule is tried. When nothing applies, the trimmed
//! input itself is the candidate.
//!
//! Rule order and the reverse group scan are contract, not accident:
//! different phrasings ("nom d'entreprise X", "vérifier le nom X",
//! "nom: X", "proposer le nom X", "X est mon nom") route deterministically
//! through different rules. Adding a rule means re-specifying the order.

use crate::error::{NomGuardError, Result};
use regex::{Regex, RegexBuilder};

/// Extraction rules in declared precedence order.
const RULE_PATTERNS: &[&str] = &[
    r#"nom [d']?entreprise ['"]?(.*?)['"]?"#,
    r#"vérifier (le )?nom (.*?)( pour|$)"#,
    r#"nom: (.*?)(\s|$)"#,
    r#"proposer (le )?nom (.*?)(\s|$)"#,
    r#"['"]?(.*?)['"]? (est|serait) (mon|le) nom"#,
];

/// Minimum trimmed length for a captured group to count as a name.
const MIN_GROUP_LEN: usize = 3;

pub struct NameExtractor {
    rules: Vec<Regex>,
}

impl NameExtractor {
    pub fn new() -> Result<Self> {
        let rules = RULE_PATTERNS
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        NomGuardError::internal(format!("extraction rule '{}': {}", pattern, e))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Pull a candidate company name out of `text`.
    pub fn extract(&self, text: &str) -> String {
        for rule in &self.rules {
            if let Some(caps) = rule.captures(text) {
                let groups: Vec<_> = caps.iter().skip(1).collect();
                for group in groups.into_iter().rev().flatten() {
                    let candidate = group.as_str().trim();
                    if candidate.chars().count() >= MIN_GROUP_LEN {
                        return candidate.to_string();
                    }
                }
            }
        }
        text.trim().to_string()
    }
}
