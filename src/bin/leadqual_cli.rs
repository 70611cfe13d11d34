//! LeadQualBot interactive console
//!
//! Reads user messages, answers from the knowledge base and keeps a session
//! summary that is appended to a text file on exit.
//!
//! # Usage
//!
//! ```bash
//! # Default knowledge base: data/intents.json
//! leadqual_cli
//!
//! # Explicit knowledge base, show per-intent scores
//! leadqual_cli --kb config/intents.json --explain
//!
//! # Same via environment (.env is honoured)
//! LEADQUAL_KB=config/intents.json leadqual_cli
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use leadqual_bot::{
    decide_response, BotConfig, Intent, IntentLoader, IntentMatcher, SessionExporter,
    SessionSummary,
};

const HELP_MESSAGE: &str = "Comandos disponíveis:
/ajuda - Mostra esta mensagem
/resumo - Mostra o resumo da sessão atual
/reiniciar - Reinicia a conversa
/sair - Encerra o chatbot

Você também pode fazer perguntas sobre nossos serviços!
";

#[derive(Parser)]
#[command(name = "leadqual_cli")]
#[command(version)]
#[command(about = "Rule-based FAQ / lead qualification chatbot")]
#[command(long_about = None)]
struct Cli {
    /// Knowledge base JSON file [env: LEADQUAL_KB]
    #[arg(long)]
    kb: Option<PathBuf>,

    /// File session summaries are appended to [env: LEADQUAL_EXPORT]
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print per-intent scores after every reply
    #[arg(long)]
    explain: bool,

    /// Suppress the welcome banner
    #[arg(long, short)]
    quiet: bool,
}

enum Command {
    Help,
    Summary,
    Restart,
    Quit,
    Message,
}

impl Command {
    fn parse(input: &str) -> Self {
        match input {
            "/ajuda" => Self::Help,
            "/resumo" => Self::Summary,
            "/reiniciar" => Self::Restart,
            "/sair" => Self::Quit,
            _ => Self::Message,
        }
    }
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BotConfig::resolve(cli.kb.clone(), cli.export.clone(), |key| {
        std::env::var(key).ok()
    });

    let loader = IntentLoader::new(&config.kb_path);
    let intents = match loader.load() {
        Ok(intents) => intents,
        Err(e) => {
            eprintln!(
                "{} Erro ao carregar base de conhecimento: {}",
                "error:".red().bold(),
                e
            );
            eprintln!(
                "Dica: use --kb <caminho-do-json> ou mantenha {} no diretório atual.",
                loader.path().display()
            );
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config, &intents) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// READ LOOP
// =============================================================================

fn run(cli: &Cli, config: &BotConfig, intents: &[Option<Intent>]) -> Result<()> {
    let matcher = IntentMatcher::new();
    let exporter = SessionExporter::new(&config.export_path);
    let mut summary = SessionSummary::new();
    let mut editor = DefaultEditor::new().context("Failed to initialise line editor")?;

    if !cli.quiet {
        println!("{}", "Bem-vindo ao LeadQualBot!".green().bold());
        println!("Digite /ajuda para ver os comandos disponíveis.\n");
    }

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            println!("{}\n", config.fallback_message);
            continue;
        }
        let _ = editor.add_history_entry(trimmed);

        match Command::parse(trimmed) {
            Command::Quit => break,
            Command::Help => println!("{}", HELP_MESSAGE),
            Command::Summary => {
                println!("{}\n", SessionExporter::format_for_console(&summary));
            }
            Command::Restart => {
                finish_session(&exporter, &mut summary);
                summary = SessionSummary::new();
                println!("Conversa reiniciada. Como posso ajudar?\n");
            }
            Command::Message => {
                let decision =
                    decide_response(Some(trimmed), intents, &matcher, &config.fallback_message);
                match &decision.intent {
                    Some(name) => summary.record_intent(name),
                    None => summary.record_fallback(),
                }
                debug!(intent = ?decision.intent, "reply chosen");

                println!("{}\n", decision.response);
                if cli.explain {
                    print_explain(&matcher, trimmed, intents);
                }
            }
        }
    }

    finish_session(&exporter, &mut summary);
    println!("{}", SessionExporter::format_for_console(&summary));
    println!("Até logo!");
    Ok(())
}

fn finish_session(exporter: &SessionExporter, summary: &mut SessionSummary) {
    summary.end_session();
    if exporter.export(summary) {
        debug!("session exported to {}", exporter.output_path().display());
    }
}

fn print_explain(matcher: &IntentMatcher, message: &str, intents: &[Option<Intent>]) {
    let winner = matcher.evaluate(message, intents).index();

    for score in matcher.rank(message, intents) {
        let line = format!(
            "  [{}] {:<20} score={} priority={}",
            score.index, score.name, score.score, score.priority
        );
        if Some(score.index) == winner {
            println!("{}", line.green());
        } else if score.score > 0 {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.dimmed());
        }
    }
    println!();
}
