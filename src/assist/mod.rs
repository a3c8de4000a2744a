//! Free-form question forwarding to a local LLM
//!
//! Questions the name pipeline cannot answer are handed to an assist
//! provider along with the session transcript. Name checking never depends
//! on this module; it is a collaborator behind the `assist` feature.

pub mod ollama;

// Re-export main functionality
pub use ollama::OllamaAssist;

use crate::error::Result;
use async_trait::async_trait;

/// A backend able to answer a free-form question.
#[async_trait]
pub trait AssistProvider: Send + Sync {
    /// Complete `prompt` and return the raw answer text.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Get the provider name
    fn name(&self) -> &'static str;

    /// Get the model identifier
    fn model(&self) -> &str;
}

/// Build the assist prompt: role preamble, conversation so far, new question.
pub fn build_assist_prompt(history: &str, question: &str, style: &str) -> String {
    format!(
        "Tu es un expert en création d'entreprise en Tunisie. \
         Fournis des informations précises sur la disponibilité des noms d'entreprise \
         et propose 5 suggestions alternatives quand nécessaire.\n\n\
         Historique:\n{}\n\n\
         Nouvelle question: {}\n\n\
         Réponds de manière {} en 1-2 phrases maximum.",
        history, question, style
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_history_and_question() {
        let prompt = build_assist_prompt(
            "Utilisateur: bonjour\nAssistant: bonjour !",
            "le nom atlas est-il libre ?",
            "concise",
        );
        assert!(prompt.contains("Historique:\nUtilisateur: bonjour"));
        assert!(prompt.contains("Nouvelle question: le nom atlas est-il libre ?"));
        assert!(prompt.contains("manière concise"));
    }

    #[test]
    fn test_prompt_with_empty_history() {
        let prompt = build_assist_prompt("", "bonjour", "amical");
        assert!(prompt.contains("Historique:\n\n"));
        assert!(prompt.starts_with("Tu es un expert"));
    }
}
