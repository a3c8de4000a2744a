//! Alternative-name generation when a requested name is reserved
//!
//! Generate-and-filter: sector-flavored templates first, generic fallbacks
//! second, each candidate kept only if it is available and not already in the
//! output. Template order is fixed; exhausting every template before the
//! quota is reached just yields a shorter list.

use crate::matching::{normalize, RegistryMatcher};
use crate::types::BusinessSector;

/// Default number of suggestions per request.
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

pub struct SuggestionEngine {
    count: usize,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self::with_count(DEFAULT_SUGGESTION_COUNT)
    }

    pub fn with_count(count: usize) -> Self {
        Self { count }
    }

    /// Up to `count` names, each available at generation time, no duplicates
    /// within the call.
    pub fn suggest(
        &self,
        name: &str,
        sector: BusinessSector,
        matcher: &RegistryMatcher,
    ) -> Vec<String> {
        let base = normalize(name);
        let mut suggestions: Vec<String> = Vec::with_capacity(self.count);

        let candidates = sector_templates(&base, sector)
            .into_iter()
            .chain(generic_templates(&base));

        for candidate in candidates {
            if suggestions.len() >= self.count {
                break;
            }
            if suggestions.contains(&candidate) || matcher.is_reserved(&candidate) {
                continue;
            }
            suggestions.push(candidate);
        }

        suggestions
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Five sector-flavored candidates, in fixed order.
fn sector_templates(base: &str, sector: BusinessSector) -> Vec<String> {
    match sector {
        BusinessSector::Technologie => vec![
            format!("{base} technologies"),
            format!("{base} solutions"),
            format!("{base} digital"),
            format!("{base} labs"),
            format!("{base} innovations"),
        ],
        BusinessSector::Restauration => vec![
            format!("le {base}"),
            format!("{base} cuisine"),
            format!("{base} gourmet"),
            format!("{base} bistro"),
            format!("{base} delice"),
        ],
        BusinessSector::Commerce => vec![
            format!("{base} shop"),
            format!("boutique {base}"),
            format!("{base} store"),
            format!("{base} market"),
            format!("{base} outlet"),
        ],
        BusinessSector::Construction => vec![
            format!("{base} construction"),
            format!("{base} bâtiment"),
            format!("{base} travaux"),
            format!("{base} immobilier"),
            format!("{base} architecture"),
        ],
        BusinessSector::Sante => vec![
            format!("{base} santé"),
            format!("{base} médical"),
            format!("{base} care"),
            format!("{base} pharma"),
            format!("{base} clinique"),
        ],
        BusinessSector::Education => vec![
            format!("{base} éducation"),
            format!("{base} academy"),
            format!("{base} learning"),
            format!("{base} institute"),
            format!("{base} campus"),
        ],
        BusinessSector::Consulting => vec![
            format!("{base} consulting"),
            format!("{base} conseil"),
            format!("{base} partners"),
            format!("{base} solutions"),
            format!("{base} advisory"),
        ],
        BusinessSector::Agriculture => vec![
            format!("{base} ferme"),
            format!("{base} agriculture"),
            format!("{base} nature"),
            format!("{base} bio"),
            format!("ferme {base}"),
        ],
        BusinessSector::General => vec![
            format!("{base} group"),
            format!("{base} services"),
            format!("{base} tunisie"),
            format!("{base} international"),
            format!("{base} excellence"),
        ],
    }
}

/// Generic fallbacks applied after the sector list, in fixed order.
fn generic_templates(base: &str) -> Vec<String> {
    vec![
        format!("new {base}"),
        format!("global {base}"),
        format!("{base} premium"),
        format!("{base} pro"),
        format!("elite {base}"),
        format!("{base} excellence"),
        format!("{base} vision"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use std::sync::Arc;

    fn matcher(names_fr: &[&str]) -> RegistryMatcher {
        RegistryMatcher::new(Arc::new(Registry::from_tracks(
            names_fr.iter().map(|s| s.to_string()).collect(),
            Vec::new(),
            None,
        )))
    }

    #[test]
    fn test_fills_quota_from_sector_templates() {
        let matcher = matcher(&["novatech"]);
        let suggestions =
            SuggestionEngine::new().suggest("novatech", BusinessSector::Technologie, &matcher);
        assert_eq!(
            suggestions,
            vec![
                "novatech technologies",
                "novatech solutions",
                "novatech digital"
            ]
        );
    }

    #[test]
    fn test_skips_reserved_candidates() {
        let matcher = matcher(&["novatech", "novatech technologies"]);
        let suggestions =
            SuggestionEngine::new().suggest("novatech", BusinessSector::Technologie, &matcher);
        assert_eq!(
            suggestions,
            vec!["novatech solutions", "novatech digital", "novatech labs"]
        );
    }

    #[test]
    fn test_every_suggestion_available_at_generation_time() {
        let matcher = matcher(&["atlas", "atlas shop", "boutique atlas"]);
        let suggestions =
            SuggestionEngine::new().suggest("atlas", BusinessSector::Commerce, &matcher);
        assert!(!suggestions.is_empty());
        for suggestion in &suggestions {
            assert!(!matcher.is_reserved(suggestion), "reserved: {suggestion}");
        }
    }

    #[test]
    fn test_base_is_normalized() {
        let matcher = matcher(&[]);
        let suggestions =
            SuggestionEngine::new().suggest("  Atlas ", BusinessSector::General, &matcher);
        assert_eq!(suggestions[0], "atlas group");
    }

    #[test]
    fn test_generic_fallback_after_sector_exhaustion() {
        let matcher = matcher(&[
            "atlas group",
            "atlas services",
            "atlas tunisie",
            "atlas international",
            "atlas excellence",
        ]);
        let suggestions =
            SuggestionEngine::new().suggest("atlas", BusinessSector::General, &matcher);
        assert_eq!(suggestions, vec!["new atlas", "global atlas", "atlas premium"]);
    }

    #[test]
    fn test_no_duplicates_and_shorter_list_on_exhaustion() {
        // "{base} excellence" appears in both the général list and the
        // generic fallbacks; 5 + 7 templates therefore hold 11 unique names.
        let matcher = matcher(&[]);
        let suggestions =
            SuggestionEngine::with_count(20).suggest("atlas", BusinessSector::General, &matcher);
        assert_eq!(suggestions.len(), 11);
        let unique: std::collections::HashSet<_> = suggestions.iter().collect();
        assert_eq!(unique.len(), suggestions.len());
    }
}
