//! Wellness Guide terminal chat
//!
//! Line-oriented chat surface over the same session API the GUI uses.
//! Plain lines are sent as messages; lines starting with `/` are commands.

use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use wellness_guide_backend::{ChatSession, Config, ReplySource, WellnessProvider};

const SIMULATED_WARNING: &str =
    "⚠️  Using simulated response. Set an API key with /key <token> for real Wellness Guide responses.";

const HELP: &str = "\
Commands:
  /key <token>  use an API key for real responses (kept in memory only)
  /key          forget the API key
  /clear        clear chat history
  /stats        show the number of messages
  /history      show the whole conversation
  /help         show this help
Anything else is sent to your Wellness Guide. End input (Ctrl+D) to leave.";

/// One parsed line of user input
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Send(&'a str),
    SetKey(&'a str),
    ClearKey,
    Clear,
    Stats,
    History,
    Help,
    Unknown(&'a str),
    Empty,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        if line.is_empty() {
            return Command::Empty;
        }
        let trimmed = line.trim();
        if !trimmed.starts_with('/') {
            return Command::Send(line);
        }

        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (trimmed, ""),
        };
        match name {
            "/key" if rest.is_empty() => Command::ClearKey,
            "/key" => Command::SetKey(rest),
            "/clear" => Command::Clear,
            "/stats" => Command::Stats,
            "/history" => Command::History,
            "/help" => Command::Help,
            other => Command::Unknown(other),
        }
    }
}

fn print_prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn print_history(session: &ChatSession) {
    if session.messages().is_empty() {
        println!("(no messages yet)");
    }
    for message in session.messages() {
        println!("{}", message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the conversation
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let provider = Arc::new(WellnessProvider::new(config.provider.clone()));
    let mut session = ChatSession::new(provider);
    if let Some(key) = config.initial_credential {
        session.set_credential(key);
    }

    println!("🌿 Wellness Guide Assistant");
    println!("I'm here to support your wellness journey: stress, sleep, nutrition, movement and self-care.");
    println!("Remember: this is general guidance only, not medical advice.");
    if session.has_credential() {
        println!("✅ API Key configured");
    }
    println!("Type /help for commands.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_prompt()?;
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Empty => {}
            Command::Send(text) => {
                println!("🤖 AI is thinking...");
                if let Some(source) = session.submit(text).await {
                    if let Some(reply) = session.messages().last() {
                        println!("{}", reply);
                    }
                    if source == ReplySource::Simulated {
                        println!("{}", SIMULATED_WARNING);
                    }
                }
            }
            Command::SetKey(key) => {
                session.set_credential(key);
                println!("✅ API Key configured");
            }
            Command::ClearKey => {
                session.clear_credential();
                println!("API key removed, replies will be simulated");
            }
            Command::Clear => {
                session.clear_history();
                println!("🗑️  Chat history cleared");
            }
            Command::Stats => println!("📊 Total Messages: {}", session.message_count()),
            Command::History => print_history(&session),
            Command::Help => println!("{}", HELP),
            Command::Unknown(name) => println!("Unknown command {} (try /help)", name),
        }
        print_prompt()?;
    }

    println!();
    info!(message_count = session.message_count(), "Session ended");
    Ok(())
}
