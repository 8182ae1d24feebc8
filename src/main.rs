use std::io::{self, BufRead, Write};

use agent_api::{AgentClient, AgentConfig};
use agent_panel::message::ContentBlock;
use agent_panel::Conversation;

/// Line-oriented chat loop over the conversation core. Stands in for the
/// desktop shell: one exchange at a time, rendered after it settles.
#[tokio::main]
async fn main() {
    let config = AgentConfig::from_env();
    let client = match AgentClient::new(config) {
        Ok(client) => client,
        Err(error) => {
            eprintln!("failed to construct transport: {error}");
            std::process::exit(1);
        }
    };

    let mode = if client.config().configured_base_url().is_none() {
        " (offline stub)"
    } else {
        ""
    };
    println!("agent_panel — model {}{}", client.config().model, mode);
    println!("type a message, or /quit to exit");

    let mut conversation = Conversation::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        if line.trim() == "/quit" {
            break;
        }

        let settled = conversation.messages().len();
        conversation.send(&line, &client, None).await;
        for message in &conversation.messages()[settled..] {
            render(message.role.as_str(), &message.blocks, &message.content);
        }
    }
}

fn render(role: &str, blocks: &[ContentBlock], content: &str) {
    if blocks.is_empty() {
        println!("[{role}] {content}");
        return;
    }

    println!("[{role}]");
    for block in blocks {
        match block {
            ContentBlock::Text(body) => print!("{body}"),
            ContentBlock::Code { language, code } => {
                print!("--- code ({language})\n{code}---\n");
            }
            ContentBlock::Tool(call) => {
                println!("tool call {}: {}", call.id, call.name);
            }
        }
    }
    println!();
}
