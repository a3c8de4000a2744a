//! Error handling for nomguard

use thiserror::Error;

/// Main error type for nomguard
#[derive(Error, Debug)]
pub enum NomGuardError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Registry error: {message}")]
    Registry {
        message: String,
        path: Option<String>,
    },

    #[error("Assist provider error ({provider}): {message}")]
    Assist { provider: String, message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl NomGuardError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a registry loading error
    pub fn registry(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Registry {
            message: message.into(),
            path,
        }
    }

    /// Create an assist provider error
    pub fn assist(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Assist {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!(
                    "❌ Problème de configuration: {}\n💡 Vérifiez votre fichier .env",
                    message
                )
            }
            Self::Registry { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!(
                    "⚠️  Registre indisponible{}: {}\n💡 Tous les noms paraîtront disponibles",
                    path_info, message
                )
            }
            Self::Assist { provider, message } => {
                format!(
                    "❌ Erreur de l'assistant ({}): {}\n💡 Vérifiez qu'Ollama est démarré",
                    provider, message
                )
            }
            Self::Network {
                message,
                status_code,
                ..
            } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!(
                    "❌ Erreur réseau{}: {}\n💡 Vérifiez votre connexion",
                    status, message
                )
            }
            Self::Parse { message, .. } => {
                format!("❌ Erreur d'analyse: {}", message)
            }
            Self::Validation { message } => {
                format!("❌ Erreur de validation: {}", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ Erreur fichier{}: {}", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Erreur interne: {}\n💡 C'est un bug, merci de le signaler", message)
            }
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for NomGuardError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for NomGuardError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for NomGuardError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NomGuardError>;
