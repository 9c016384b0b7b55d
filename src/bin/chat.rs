//! Terminal chat client for the ai-chat relay.
//!
//! Reads messages from stdin, appends each turn to the in-memory log, and
//! renders the assistant reply, or a synthesized error bubble when the
//! relay call fails.

use std::io::{self, BufRead, Write};

use clap::Parser;

use ai_chat_relay::client::{ChatLog, ChatMessage, RelayClient};

#[derive(Parser, Debug)]
#[command(name = "chat", about = "Terminal chat client for the ai-chat relay")]
struct Cli {
    #[arg(long, env = "RELAY_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let relay = match RelayClient::new(cli.base_url.as_str()) {
        Ok(relay) => relay,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let mut log = ChatLog::with_greeting();
    if let Some(greeting) = log.last() {
        print_message(greeting);
    }
    println!("(type a message, or /quit to exit)");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "/quit" {
            break;
        }

        log.push_user(input);
        match relay.send(input).await {
            Ok(reply) => log.push_assistant(reply),
            Err(e) => log.push_error(&e.to_string()),
        }
        if let Some(message) = log.last() {
            print_message(message);
        }
    }
}

fn print_message(message: &ChatMessage) {
    let author = if message.is_user { "you" } else { "assistant" };
    println!(
        "[{:02}:{:02}] {author}: {}",
        message.timestamp.hour(),
        message.timestamp.minute(),
        message.text
    );
}
