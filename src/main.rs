mod content;
mod widget;

use std::io::{BufRead, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use widget::ChatWidget;
use widget::config::ChatConfig;
use widget::format::format_reply;
use widget::message::Role;

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Personal portfolio with an embedded assistant widget")]
struct Cli {
    /// Assistant backend base URL; overrides PORTFOLIO_CHAT_URL.
    #[arg(long)]
    chat_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the portfolio sections.
    Show,
    /// Open the assistant widget in an interactive session.
    Chat,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Show) {
        Command::Show => println!("{}", content::render::render_site()),
        Command::Chat => run_chat(cli.chat_url).await,
    }
}

/// Interactive widget session: one fresh widget instance, torn down on
/// exit with no persistence. Empty lines are silent no-ops; `/quit` or
/// EOF ends the session.
async fn run_chat(chat_url: Option<String>) {
    let mut config = ChatConfig::from_env();
    if let Some(url) = chat_url {
        config.base_url = url.trim_end_matches('/').to_string();
    }
    tracing::info!(base_url = %config.base_url, "assistant session starting");

    let backend = widget::HttpBackend::new(&config).expect("HTTP client build failed");
    let chat = Arc::new(ChatWidget::new(Arc::new(backend)));

    // Loading indicator: watch the revision channel and announce when an
    // exchange goes in flight.
    {
        let chat = chat.clone();
        let mut revisions = chat.subscribe();
        tokio::spawn(async move {
            while revisions.changed().await.is_ok() {
                if chat.snapshot().await.is_awaiting_reply {
                    println!("…");
                }
            }
        });
    }

    let greeting = chat.snapshot().await.history[0].content.clone();
    println!("{greeting}");
    println!("(type /quit to close)\n");
    print!("> ");
    let _ = std::io::stdout().flush();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.expect("stdin read failed");
        if line.trim() == "/quit" {
            break;
        }

        let before = chat.snapshot().await.history.len();
        chat.set_pending_input(line).await;
        chat.submit().await;

        let snapshot = chat.snapshot().await;
        if snapshot.history.len() > before {
            if let Some(turn) = snapshot.history.last() {
                if turn.role == Role::Assistant {
                    println!("{}\n", format_reply(&turn.content));
                }
            }
        }
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}
