//! Reserved-name decisions against the company registry

use crate::matching::{normalize, similarity};
use crate::registry::Registry;
use crate::types::{MatchConfig, MatchDecision, MatchKind};
use std::sync::Arc;

/// Decides whether a proposed name is reserved.
///
/// Scan order is a documented contract: exact match over both tracks first
/// (primary then secondary), then fuzzy over the primary track, then fuzzy
/// over the secondary track. Callers reading `matched_against` therefore see
/// primary-track matches preferred when both tie.
///
/// An empty registry yields `is_reserved == false` for every input. The
/// system fails open when no data is available; deployments should treat an
/// empty registry as a configuration alarm, not a passive success.
///
/// Each call is O(registry size) similarity computations. Registries beyond a
/// few thousand entries would want an n-gram pre-filter in front of this scan;
/// the contract leaves that as an extension point.
pub struct RegistryMatcher {
    registry: Arc<Registry>,
    config: MatchConfig,
}

impl RegistryMatcher {
    /// Create a matcher with the default threshold (0.85).
    pub fn new(registry: Arc<Registry>) -> Self {
        Self::with_config(registry, MatchConfig::default())
    }

    pub fn with_config(registry: Arc<Registry>, config: MatchConfig) -> Self {
        Self { registry, config }
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Whether `name` exactly or approximately matches a registry entry.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.check(name).is_reserved
    }

    /// Full decision, with the matched entry when reserved.
    pub fn check(&self, name: &str) -> MatchDecision {
        // Clamp before scoring: the scorer is quadratic in input length.
        let candidate: String = normalize(name)
            .chars()
            .take(self.config.max_candidate_len)
            .collect();

        let decision = self.scan(&candidate);
        tracing::debug!(
            candidate = %candidate,
            reserved = decision.is_reserved,
            matched = decision.matched_against.as_deref().unwrap_or(""),
            "registry lookup"
        );
        decision
    }

    fn scan(&self, candidate: &str) -> MatchDecision {
        let registry = &self.registry;

        // Exact duplicates must always be caught, whatever the threshold.
        // Padded entries have empty names on one track; those never match.
        for (i, norm) in registry.normalized_fr().iter().enumerate() {
            if !norm.is_empty() && norm == candidate {
                let name = registry.entries()[i].name_fr.as_str();
                return MatchDecision::reserved(name, MatchKind::Exact);
            }
        }
        for (i, norm) in registry.normalized_ar().iter().enumerate() {
            if !norm.is_empty() && norm == candidate {
                let name = registry.entries()[i].name_ar.as_str();
                return MatchDecision::reserved(name, MatchKind::Exact);
            }
        }

        for (i, norm) in registry.normalized_fr().iter().enumerate() {
            if !norm.is_empty() && similarity(candidate, norm) >= self.config.threshold {
                let name = registry.entries()[i].name_fr.as_str();
                return MatchDecision::reserved(name, MatchKind::Fuzzy);
            }
        }
        for (i, norm) in registry.normalized_ar().iter().enumerate() {
            if !norm.is_empty() && similarity(candidate, norm) >= self.config.threshold {
                let name = registry.entries()[i].name_ar.as_str();
                return MatchDecision::reserved(name, MatchKind::Fuzzy);
            }
        }

        MatchDecision::not_reserved()
    }
}
