//! NomGuard - company name availability checking and suggestions
//!
//! Decides whether a proposed company name is already taken in the bilingual
//! registry, extracts the name and business sector from free-form text, and
//! proposes available alternatives when the name is reserved.

#[cfg(feature = "assist")]
pub mod assist;
pub mod engine;
pub mod error;
pub mod extract;
pub mod matching;
pub mod moderation;
pub mod registry;
pub mod session;
pub mod suggest;
pub mod types;

// Re-export commonly used types
pub use error::{NomGuardError, Result};
pub use types::{
    AssistConfig, BusinessSector, CheckOutcome, CheckRequest, ExtractionResult, MatchConfig,
    MatchDecision, MatchKind, RegistryEntry,
};

// Re-export main functionality
pub use engine::NameCheckEngine;
pub use matching::{normalize, similarity, RegistryMatcher};
pub use moderation::ProfanityFilter;
pub use registry::{load_or_empty, JsonFileSource, Registry, RegistrySource};
pub use suggest::SuggestionEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
