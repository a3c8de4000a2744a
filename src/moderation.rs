//! Profanity gate run before any extraction or lookup

use crate::error::{NomGuardError, Result};
use regex::Regex;

/// Fixed multilingual blocklist: French/English terms, Latin-script
/// transliterations of Tunisian dialect, and Arabic-script terms.
const BLOCKLIST: &[&str] = &[
    "naco", "fuck", "shit", "merde", "pute", "con", "connard", "asshole", "idiot", "stupid",
    "bastard", "nik", "potano", "zebi", "kelb", "sharmuta", "bent", "benti", "bnit", "3ayz",
    "taban", "haywan", "tiz", "kos", "kosomak", "3irs", "زب", "نيك", "كلب", "شرموطة", "بنت",
    "بنتي", "بنيت", "عيز", "تعبان", "حيوان", "طيز", "كس", "كس أمك", "عرص",
];

/// Rejects abusive input before the pipeline runs.
///
/// Matching is word-delimited: a blocklist term hits only when bounded by
/// non-word characters or string edges, never as a substring inside a longer
/// word. Input is case-folded first.
pub struct ProfanityFilter {
    pattern: Option<Regex>,
}

impl ProfanityFilter {
    /// Filter over the built-in blocklist.
    pub fn new() -> Result<Self> {
        Self::with_words(BLOCKLIST.iter().copied())
    }

    /// Filter over a custom word list. An empty list matches nothing.
    pub fn with_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let escaped: Vec<String> = words
            .into_iter()
            .map(|w| regex::escape(&w.as_ref().to_lowercase()))
            .filter(|w| !w.is_empty())
            .collect();

        if escaped.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = Regex::new(&format!(r"\b(?:{})\b", escaped.join("|")))
            .map_err(|e| NomGuardError::internal(format!("blocklist pattern: {}", e)))?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn contains_profanity(&self, text: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(&text.to_lowercase()),
            None => false,
        }
    }
}
