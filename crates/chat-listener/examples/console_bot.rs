//! Console wildlife bot: type commands on stdin, replies print to stdout.
//!
//! Run with:
//! ```bash
//! cargo run --example console_bot
//! ```
//!
//! Then try `!animal mountain goat`, `!deer`, or `!taxonhelp heron`.

use std::time::{SystemTime, UNIX_EPOCH};

use bot_core::{async_trait, Reply};
use chat_listener::{ChatClient, ChatError, InboundMessage, MessageProcessor, ProcessorConfig};
use inat_client::InatClient;
use sighting_brain::SightingBrain;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Chat client that prints replies to stdout, rendering embeds as text.
struct ConsoleChat;

#[async_trait]
impl ChatClient for ConsoleChat {
    async fn send(&self, reply: &Reply) -> Result<(), ChatError> {
        if let Some(ref text) = reply.text {
            println!("{text}");
        }
        if let Some(ref embed) = reply.embed {
            println!("== {} ==", embed.title);
            if let Some(ref description) = embed.description {
                println!("{description}");
            }
            for field in &embed.fields {
                println!("{}: {}", field.name, field.value);
            }
            if let Some(ref image) = embed.image_url {
                println!("[photo] {image}");
            }
            if let Some(ref url) = embed.url {
                println!("[link] {url}");
            }
            if let Some(ref footer) = embed.footer {
                println!("{footer}");
            }
        }
        Ok(())
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let brain = SightingBrain::with_defaults(InatClient::from_env()?);
    let processor = MessageProcessor::new(ConsoleChat, brain, ProcessorConfig::default());

    println!("Wildlife bot ready. Try: !animal red fox, !deer, !taxonhelp heron");

    let lines = BufReader::new(tokio::io::stdin()).lines();
    let messages = futures::stream::unfold(lines, |mut lines| async {
        match lines.next_line().await {
            Ok(Some(text)) => Some((InboundMessage::direct("console-user", text, now_millis()), lines)),
            _ => None,
        }
    });

    processor.run(messages).await?;
    Ok(())
}
