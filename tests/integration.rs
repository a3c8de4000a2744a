//! Integration tests for nomguard

use nomguard::{
    similarity, BusinessSector, CheckOutcome, CheckRequest, JsonFileSource, MatchConfig,
    NameCheckEngine, ProfanityFilter, Registry, RegistryMatcher, SuggestionEngine,
};
use std::sync::Arc;

fn registry_of(names_fr: &[&str], names_ar: &[&str]) -> Arc<Registry> {
    Arc::new(Registry::from_tracks(
        names_fr.iter().map(|s| s.to_string()).collect(),
        names_ar.iter().map(|s| s.to_string()).collect(),
        None,
    ))
}

#[test]
fn test_end_to_end_reserved_name() {
    let engine = NameCheckEngine::new(registry_of(&["novatech"], &[])).unwrap();
    let request = CheckRequest {
        prompt: "nom: novatech".to_string(),
        extract_mode: true,
        short_response: false,
    };

    match engine.check(&request) {
        CheckOutcome::Reserved { name, suggestions } => {
            assert_eq!(name, "novatech");
            assert!(!suggestions.is_empty());
            for suggestion in &suggestions {
                assert_ne!(suggestion, "novatech");
                assert!(
                    !engine.matcher().is_reserved(suggestion),
                    "suggested a reserved name: {suggestion}"
                );
            }
        }
        other => panic!("expected reserved outcome, got {other:?}"),
    }
}

#[test]
fn test_end_to_end_empty_registry() {
    let engine = NameCheckEngine::new(Arc::new(Registry::empty())).unwrap();

    for prompt in ["nom: novatech", "vérifier le nom atlas", "carthage"] {
        let outcome = engine.check(&CheckRequest::new(prompt));
        assert!(
            matches!(outcome, CheckOutcome::Available { .. }),
            "prompt {prompt:?} should be available against an empty registry"
        );
    }
}

#[test]
fn test_similarity_properties() {
    let pairs = [
        ("novatech", "novatec"),
        ("atlas", "atlas group"),
        ("café du coin", "cafe du coin"),
    ];
    for (a, b) in pairs {
        assert_eq!(similarity(a, b), similarity(b, a));
        let score = similarity(a, b);
        assert!((0.0..=1.0).contains(&score));
    }

    assert_eq!(similarity("novatech", "novatech"), 1.0);
    assert_eq!(similarity("", ""), 1.0);
    assert_eq!(similarity("", "x"), 0.0);
}

#[test]
fn test_exact_match_floor() {
    let registry = registry_of(
        &["novatech", "atlas commerce", "carthage"],
        &["نوفاتك", "أطلس", "قرطاج"],
    );
    let matcher = RegistryMatcher::new(Arc::clone(&registry));

    for entry in registry.entries() {
        assert!(matcher.is_reserved(&entry.name_fr), "{}", entry.name_fr);
        assert!(matcher.is_reserved(&entry.name_ar), "{}", entry.name_ar);
    }
}

#[test]
fn test_threshold_monotonicity() {
    let registry = registry_of(&["novatech", "atlas"], &[]);
    let strict = RegistryMatcher::with_config(
        Arc::clone(&registry),
        MatchConfig {
            threshold: 0.9,
            ..MatchConfig::default()
        },
    );
    let lenient = RegistryMatcher::with_config(
        Arc::clone(&registry),
        MatchConfig {
            threshold: 0.6,
            ..MatchConfig::default()
        },
    );

    let candidates = ["novatech", "novatec", "novatech sarl", "atlas", "atlantis", "zephyr"];
    for candidate in candidates {
        if strict.is_reserved(candidate) {
            assert!(
                lenient.is_reserved(candidate),
                "lowering the threshold lost {candidate:?}"
            );
        }
    }
    // The lenient matcher really is wider here, not just equal.
    assert!(lenient.is_reserved("novatech sarl"));
    assert!(!strict.is_reserved("novatech sarl"));
}

#[test]
fn test_suggestions_unique_and_available() {
    let matcher = RegistryMatcher::new(registry_of(&["medina", "medina shop"], &[]));
    let suggestions =
        SuggestionEngine::with_count(10).suggest("medina", BusinessSector::Commerce, &matcher);

    let unique: std::collections::HashSet<_> = suggestions.iter().collect();
    assert_eq!(unique.len(), suggestions.len());
    for suggestion in &suggestions {
        assert!(!matcher.is_reserved(suggestion));
    }
}

#[test]
fn test_profanity_whole_words_only() {
    let filter = ProfanityFilter::new().unwrap();
    assert!(!filter.contains_profanity("assholeX"));
    assert!(filter.contains_profanity("asshole!"));
    assert!(filter.contains_profanity("nom: asshole"));
}

#[test]
fn test_extraction_rule_precedence() {
    let engine = NameCheckEngine::new(Arc::new(Registry::empty())).unwrap();
    let outcome = engine.check(&CheckRequest::new("nom: novatech"));
    assert_eq!(
        outcome,
        CheckOutcome::Available {
            name: "novatech".to_string()
        }
    );
}

#[test]
fn test_concept_classification_is_deterministic() {
    let engine = NameCheckEngine::new(registry_of(&["saveur"], &[])).unwrap();
    // Sector keyword present: suggestions take the restauration templates.
    let outcome = engine.check(&CheckRequest::new(
        "je veux ouvrir un restaurant, nom: saveur",
    ));
    match outcome {
        CheckOutcome::Reserved { suggestions, .. } => {
            assert_eq!(suggestions[0], "le saveur");
        }
        other => panic!("expected reserved outcome, got {other:?}"),
    }
}

#[test]
fn test_rejection_outcome_renders_without_pipeline_run() {
    let engine = NameCheckEngine::new(registry_of(&["novatech"], &[])).unwrap();
    let outcome = engine.check(&CheckRequest::new("nom: novatech espèce de connard"));
    assert_eq!(outcome, CheckOutcome::Profanity);
    assert!(outcome.render(false).contains("inappropriés"));
}

#[test]
fn test_registry_loaded_from_json_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"names_fr": ["novatech"], "names_ar": ["نوفاتك"]}}"#
    )
    .unwrap();

    let registry = nomguard::load_or_empty(&JsonFileSource::new(file.path()));
    let engine = NameCheckEngine::new(Arc::new(registry)).unwrap();
    assert!(matches!(
        engine.check(&CheckRequest::new("nom: novatech")),
        CheckOutcome::Reserved { .. }
    ));
}

#[test]
fn test_missing_registry_file_fails_open() {
    let registry = nomguard::load_or_empty(&JsonFileSource::new("/nonexistent/cc.json"));
    assert!(registry.is_empty());

    let engine = NameCheckEngine::new(Arc::new(registry)).unwrap();
    assert!(matches!(
        engine.check(&CheckRequest::new("nom: novatech")),
        CheckOutcome::Available { .. }
    ));
}

#[test]
fn test_outcome_serialization_shape() {
    let outcome = CheckOutcome::Reserved {
        name: "novatech".to_string(),
        suggestions: vec!["novatech solutions".to_string()],
    };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "reserved");
    assert_eq!(json["name"], "novatech");
    assert_eq!(json["suggestions"][0], "novatech solutions");
}

#[test]
fn test_cli_help() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    Command::cargo_bin("nomguard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("NOMGUARD_REGISTRY"));
}
