//! Core types and structures for nomguard

use serde::{Deserialize, Serialize};

/// Business sector inferred from a prompt.
///
/// The eight concrete sectors plus the `général` default. Display and serde
/// forms use the French labels the keyword table and templates are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSector {
    Technologie,
    Restauration,
    Commerce,
    Construction,
    #[serde(rename = "santé")]
    Sante,
    #[serde(rename = "éducation")]
    Education,
    Consulting,
    Agriculture,
    #[serde(rename = "général")]
    General,
}

impl std::fmt::Display for BusinessSector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusinessSector::Technologie => write!(f, "technologie"),
            BusinessSector::Restauration => write!(f, "restauration"),
            BusinessSector::Commerce => write!(f, "commerce"),
            BusinessSector::Construction => write!(f, "construction"),
            BusinessSector::Sante => write!(f, "santé"),
            BusinessSector::Education => write!(f, "éducation"),
            BusinessSector::Consulting => write!(f, "consulting"),
            BusinessSector::Agriculture => write!(f, "agriculture"),
            BusinessSector::General => write!(f, "général"),
        }
    }
}

impl Default for BusinessSector {
    fn default() -> Self {
        BusinessSector::General
    }
}

/// One registered company. `name_fr` and `name_ar` are the two language
/// tracks of the same entry; either name may legitimately recur across entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name_fr: String,
    pub name_ar: String,
    #[serde(default = "default_business_type")]
    pub business_type: String,
}

pub(crate) fn default_business_type() -> String {
    "SARL".to_string()
}

/// How a reserved name was matched against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::Exact => write!(f, "exact"),
            MatchKind::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// Per-lookup matching decision. Ephemeral, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDecision {
    pub is_reserved: bool,
    /// The registry name that triggered the decision, as stored.
    /// Primary-track matches are preferred over secondary-track ones.
    pub matched_against: Option<String>,
    pub kind: Option<MatchKind>,
}

impl MatchDecision {
    pub fn reserved(matched_against: impl Into<String>, kind: MatchKind) -> Self {
        Self {
            is_reserved: true,
            matched_against: Some(matched_against.into()),
            kind: Some(kind),
        }
    }

    pub fn not_reserved() -> Self {
        Self {
            is_reserved: false,
            matched_against: None,
            kind: None,
        }
    }
}

/// Candidate name and sector pulled out of one prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub candidate_name: String,
    pub business_sector: BusinessSector,
}

/// One name-check request, transport-independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    pub prompt: String,
    /// When false, the raw prompt is treated as the candidate name and the
    /// sector defaults to `général`.
    #[serde(default = "default_true")]
    pub extract_mode: bool,
    #[serde(default)]
    pub short_response: bool,
}

fn default_true() -> bool {
    true
}

impl CheckRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            extract_mode: true,
            short_response: false,
        }
    }
}

/// Structured outcome of one request. Serializes with a `status` tag so the
/// caller can render it into whatever textual format it wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckOutcome {
    /// The prompt tripped the profanity gate; nothing else ran.
    Profanity,
    Reserved {
        name: String,
        suggestions: Vec<String>,
    },
    Available {
        name: String,
    },
}

impl CheckOutcome {
    /// Render the outcome as a French chat reply. `short` picks the compact
    /// one-line form for the reserved case.
    pub fn render(&self, short: bool) -> String {
        match self {
            CheckOutcome::Profanity => {
                "⚠️ Votre message contient des propos inappropriés. Veuillez reformuler."
                    .to_string()
            }
            CheckOutcome::Reserved { name, suggestions } => {
                let joined = suggestions.join(", ");
                if short {
                    format!("❌ '{}' est réservé. Suggestions: {}", name, joined)
                } else {
                    format!(
                        "❌ Désolé, le nom '{}' est déjà réservé.\nVoici quelques suggestions : {}",
                        name, joined
                    )
                }
            }
            CheckOutcome::Available { name } => {
                format!(
                    "✅ Félicitations ! Le nom '{}' est disponible pour votre entreprise.",
                    name
                )
            }
        }
    }
}

/// Configuration for registry matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Similarity ratio at or above which a name counts as reserved.
    pub threshold: f64,
    /// Candidates are clamped to this many characters before scoring; the
    /// recursive scorer is quadratic in input length.
    pub max_candidate_len: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.85,
            max_candidate_len: 256,
        }
    }
}

/// Configuration for the local assist provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistConfig {
    pub model: String,
    pub base_url: Option<String>,
    pub temperature: f32,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            model: "llama2:7b".to_string(),
            base_url: None,
            temperature: 0.7,
        }
    }
}
