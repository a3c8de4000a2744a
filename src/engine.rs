//! Request pipeline: profanity gate, extraction, matching, suggestions

use crate::error::Result;
use crate::extract::{ConceptClassifier, NameExtractor};
use crate::matching::RegistryMatcher;
use crate::moderation::ProfanityFilter;
use crate::registry::Registry;
use crate::suggest::SuggestionEngine;
use crate::types::{
    BusinessSector, CheckOutcome, CheckRequest, ExtractionResult, MatchConfig,
};
use std::sync::Arc;

/// The complete name-check pipeline over one immutable registry.
///
/// `check` is a pure, bounded computation: it never blocks on I/O and never
/// fails. Every input, including empty or malformed text, maps to a defined
/// outcome. The engine can therefore serve any number of in-flight requests
/// without synchronization.
pub struct NameCheckEngine {
    filter: ProfanityFilter,
    extractor: NameExtractor,
    classifier: ConceptClassifier,
    matcher: RegistryMatcher,
    suggester: SuggestionEngine,
}

impl NameCheckEngine {
    /// Build an engine with default matching configuration.
    ///
    /// Fails only if a built-in pattern fails to compile.
    pub fn new(registry: Arc<Registry>) -> Result<Self> {
        Self::with_config(registry, MatchConfig::default())
    }

    pub fn with_config(registry: Arc<Registry>, config: MatchConfig) -> Result<Self> {
        Ok(Self {
            filter: ProfanityFilter::new()?,
            extractor: NameExtractor::new()?,
            classifier: ConceptClassifier::new(),
            matcher: RegistryMatcher::with_config(registry, config),
            suggester: SuggestionEngine::new(),
        })
    }

    pub fn matcher(&self) -> &RegistryMatcher {
        &self.matcher
    }

    /// Expose the profanity gate so callers can pre-screen text that will
    /// not go through `check` (e.g. free-form questions for the assistant).
    pub fn is_profane(&self, text: &str) -> bool {
        self.filter.contains_profanity(text)
    }

    /// Candidate name and sector for one request, honoring `extract_mode`.
    pub fn extraction(&self, request: &CheckRequest) -> ExtractionResult {
        if request.extract_mode {
            ExtractionResult {
                candidate_name: self.extractor.extract(&request.prompt),
                business_sector: self.classifier.classify(&request.prompt),
            }
        } else {
            ExtractionResult {
                candidate_name: request.prompt.clone(),
                business_sector: BusinessSector::General,
            }
        }
    }

    /// Run the whole pipeline for one request.
    pub fn check(&self, request: &CheckRequest) -> CheckOutcome {
        if self.filter.contains_profanity(&request.prompt) {
            tracing::info!("prompt rejected by the profanity gate");
            return CheckOutcome::Profanity;
        }

        let extraction = self.extraction(request);
        let decision = self.matcher.check(&extraction.candidate_name);

        if decision.is_reserved {
            let suggestions = self.suggester.suggest(
                &extraction.candidate_name,
                extraction.business_sector,
                &self.matcher,
            );
            tracing::debug!(
                name = %extraction.candidate_name,
                sector = %extraction.business_sector,
                matched = decision.matched_against.as_deref().unwrap_or(""),
                suggestions = suggestions.len(),
                "name reserved"
            );
            CheckOutcome::Reserved {
                name: extraction.candidate_name,
                suggestions,
            }
        } else {
            CheckOutcome::Available {
                name: extraction.candidate_name,
            }
        }
    }
}
