//! NomGuard - interactive company-name availability assistant
//!
//! Checks proposed company names against the bilingual registry, suggests
//! available alternatives, and optionally forwards free-form questions to a
//! local LLM.

use inquire::{Select, Text};
use nomguard::session::{Role, SessionStore};
use nomguard::{
    load_or_empty, CheckOutcome, CheckRequest, JsonFileSource, NameCheckEngine, Registry, Result,
};
use rand::Rng;
use std::env;
use std::process;
use std::sync::Arc;

const SESSION_ID: &str = "default";

const ACTION_CHECK: &str = "Vérifier un nom d'entreprise";
#[cfg(feature = "assist")]
const ACTION_ASK: &str = "Poser une question libre";
const ACTION_HISTORY: &str = "Afficher l'historique";
const ACTION_QUIT: &str = "Quitter";

const EXAMPLE_PROMPTS: &[&str] = &[
    "nom: novatech",
    "vérifier le nom atlas",
    "proposer le nom carthage",
    "je veux ouvrir un restaurant, nom: saveur",
];

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = nomguard::init() {
        eprintln!("❌ Échec de l'initialisation: {}", e);
        process::exit(1);
    }
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let short = args.iter().any(|a| a == "--short");
    let registry_path = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with('-'))
        .cloned()
        .or_else(|| env::var("NOMGUARD_REGISTRY").ok());

    if let Err(e) = run(registry_path, short).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

async fn run(registry_path: Option<String>, short: bool) -> Result<()> {
    println!("🏢 NomGuard v{} - vérification de noms d'entreprise", nomguard::VERSION);
    println!("═══════════════════════════════════════════════════");
    println!();

    let registry = load_registry(registry_path.as_deref());
    if registry.is_empty() {
        println!("⚠️  Registre vide ou indisponible: tous les noms paraîtront disponibles.");
    } else {
        println!("✅ Registre chargé: {} entreprises", registry.len());
    }

    let engine = NameCheckEngine::new(Arc::new(registry))?;
    let sessions = SessionStore::new();

    #[cfg(feature = "assist")]
    let assist = setup_assist();

    let example = EXAMPLE_PROMPTS[rand::thread_rng().gen_range(0..EXAMPLE_PROMPTS.len())];
    println!("💡 Exemple: {}", example);
    println!();

    let mut options = vec![ACTION_CHECK];
    #[cfg(feature = "assist")]
    options.push(ACTION_ASK);
    options.push(ACTION_HISTORY);
    options.push(ACTION_QUIT);

    loop {
        let action = match Select::new("Que voulez-vous faire ?", options.clone()).prompt() {
            Ok(action) => action,
            Err(_) => break,
        };

        match action {
            ACTION_CHECK => handle_check(&engine, &sessions, short),
            ACTION_HISTORY => show_history(&sessions),
            #[cfg(feature = "assist")]
            ACTION_ASK => handle_question(&engine, &sessions, assist.as_ref(), short).await,
            _ => break,
        }
        println!();
    }

    println!("👋 À bientôt !");
    Ok(())
}

fn load_registry(path: Option<&str>) -> Registry {
    match path {
        Some(path) => load_or_empty(&JsonFileSource::new(path)),
        None => {
            tracing::warn!("no registry path given (arg or NOMGUARD_REGISTRY)");
            Registry::empty()
        }
    }
}

fn handle_check(engine: &NameCheckEngine, sessions: &SessionStore, short: bool) {
    let prompt = match Text::new("Votre demande:").prompt() {
        Ok(prompt) => prompt,
        Err(_) => return,
    };
    if prompt.trim().is_empty() {
        return;
    }

    sessions.append(SESSION_ID, Role::User, prompt.as_str());

    let mut request = CheckRequest::new(prompt);
    request.short_response = short;
    let outcome = engine.check(&request);

    let reply = outcome.render(short);
    println!("{}", reply);
    sessions.append(SESSION_ID, Role::Assistant, reply);

    if let CheckOutcome::Available { name } = &outcome {
        tracing::debug!(name = %name, "name free to register");
    }
}

fn show_history(sessions: &SessionStore) {
    let transcript = sessions.transcript(SESSION_ID);
    if transcript.is_empty() {
        println!("(aucun échange pour l'instant)");
    } else {
        println!("{}", transcript);
    }
}

#[cfg(feature = "assist")]
fn setup_assist() -> Option<nomguard::assist::OllamaAssist> {
    use nomguard::assist::{AssistProvider, OllamaAssist};
    use nomguard::AssistConfig;

    let config = AssistConfig {
        model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| AssistConfig::default().model),
        base_url: env::var("OLLAMA_BASE_URL").ok(),
        ..AssistConfig::default()
    };

    match OllamaAssist::new(&config) {
        Ok(assist) => {
            println!("✅ Assistant configuré ({})", assist.model());
            Some(assist)
        }
        Err(e) => {
            tracing::warn!(error = %e, "assist provider unavailable");
            None
        }
    }
}

#[cfg(feature = "assist")]
async fn handle_question(
    engine: &NameCheckEngine,
    sessions: &SessionStore,
    assist: Option<&nomguard::assist::OllamaAssist>,
    short: bool,
) {
    use indicatif::{ProgressBar, ProgressStyle};
    use nomguard::assist::{build_assist_prompt, AssistProvider};
    use std::time::Duration;

    let Some(provider) = assist else {
        println!("⚠️  Assistant non configuré. Vérifiez OLLAMA_BASE_URL / OLLAMA_MODEL.");
        return;
    };

    let question = match Text::new("Votre question:").prompt() {
        Ok(question) => question,
        Err(_) => return,
    };
    if question.trim().is_empty() {
        return;
    }

    if engine.is_profane(&question) {
        println!("{}", CheckOutcome::Profanity.render(short));
        return;
    }

    // The prompt carries the history up to, not including, this question.
    let history = sessions.transcript(SESSION_ID);
    let prompt = build_assist_prompt(&history, &question, "concise");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("réflexion en cours...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let answer = provider.complete(&prompt).await;
    spinner.finish_and_clear();

    match answer {
        Ok(text) => {
            println!("🤖 {}", text);
            sessions.append(SESSION_ID, Role::User, question);
            sessions.append(SESSION_ID, Role::Assistant, text);
        }
        Err(e) => println!("{}", e.user_message()),
    }
}

fn print_help() {
    println!("🏢 NomGuard - vérification de noms d'entreprise");
    println!();
    println!("USAGE:");
    println!("    nomguard [REGISTRE.json] [--short]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help    Affiche cette aide");
    println!("    --short       Réponses compactes");
    println!();
    println!("ENVIRONNEMENT:");
    println!("    NOMGUARD_REGISTRY   Chemin du fichier registre JSON");
    println!("    OLLAMA_BASE_URL     URL de l'API Ollama (défaut: http://localhost:11434)");
    println!("    OLLAMA_MODEL        Modèle des questions libres (défaut: llama2:7b)");
    println!();
    println!("Le registre est un objet JSON: {{\"names_fr\": [...], \"names_ar\": [...], \"types\": [...]}}");
}
