//! Message processor that connects a chat transport to a Responder.

use std::time::Duration;

use bot_core::{BotError, InboundMessage, Responder};
use futures::{Stream, StreamExt};
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::{ChatClient, ChatError};

/// Default timeout for responder processing (30 seconds).
const DEFAULT_RESPOND_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the message processor.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// The bot's own user id (to ignore messages from self).
    pub bot_user: Option<String>,

    /// Whether to deliver the responder's acknowledgement (e.g.
    /// "Searching...") before the real reply.
    pub send_acknowledgements: bool,

    /// Timeout for responder processing. If the responder takes longer
    /// than this, the command is dropped and an error recorded.
    /// Default: 30 seconds.
    pub respond_timeout: Duration,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            bot_user: None,
            send_acknowledgements: true,
            respond_timeout: DEFAULT_RESPOND_TIMEOUT,
        }
    }
}

impl ProcessorConfig {
    /// Create a new config with the bot's own user id.
    pub fn with_bot_user(bot_user: impl Into<String>) -> Self {
        Self {
            bot_user: Some(bot_user.into()),
            ..Default::default()
        }
    }
}

/// Errors that can occur during message processing.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Error from the chat transport.
    #[error("chat error: {0}")]
    Chat(#[from] ChatError),

    /// Error from the responder during processing.
    #[error("responder error: {0}")]
    Responder(#[from] BotError),

    /// Responder processing timed out.
    #[error("responder timed out after {0:?}")]
    Timeout(Duration),
}

/// Result of processing a single message.
#[derive(Debug)]
pub enum ProcessResult {
    /// Message was processed and a reply sent.
    Responded { sender: String, channel: String },
    /// Message was skipped (from self, chatter, unknown command).
    Skipped { reason: String },
    /// Error occurred during processing.
    Error(ProcessorError),
}

/// A message processor that feeds chat messages through a Responder and
/// delivers the replies.
pub struct MessageProcessor<C: ChatClient, R: Responder> {
    client: C,
    responder: R,
    config: ProcessorConfig,
}

impl<C: ChatClient, R: Responder> MessageProcessor<C, R> {
    /// Create a new message processor.
    pub fn new(client: C, responder: R, config: ProcessorConfig) -> Self {
        Self {
            client,
            responder,
            config,
        }
    }

    /// Create a processor with default configuration.
    pub fn with_defaults(client: C, responder: R) -> Self {
        Self::new(client, responder, ProcessorConfig::default())
    }

    /// Get a reference to the responder.
    pub fn responder(&self) -> &R {
        &self.responder
    }

    /// Get a reference to the chat client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Check if we should process this message.
    fn should_process(&self, message: &InboundMessage) -> Result<(), String> {
        if let Some(ref bot_user) = self.config.bot_user {
            if message.sender == *bot_user {
                return Err("message from self".to_string());
            }
        }

        if message.text.trim().is_empty() {
            return Err("no text content".to_string());
        }

        Ok(())
    }

    /// Process a single message and return the result.
    pub async fn process_message(&self, message: &InboundMessage) -> ProcessResult {
        if let Err(reason) = self.should_process(message) {
            debug!("Skipping message: {}", reason);
            return ProcessResult::Skipped { reason };
        }

        // Acknowledge fast commands before the slow lookups start
        if self.config.send_acknowledgements {
            if let Some(ack) = self.responder.acknowledge(message) {
                if let Err(e) = self.client.send(&ack).await {
                    warn!("Failed to send acknowledgement: {}", e);
                }
            }
        }

        let result = timeout(
            self.config.respond_timeout,
            self.responder.respond(message.clone()),
        )
        .await;

        let reply = match result {
            Ok(Ok(Some(reply))) => reply,
            Ok(Ok(None)) => {
                return ProcessResult::Skipped {
                    reason: "not a command".to_string(),
                }
            }
            Ok(Err(e)) => {
                error!("Responder error for {}: {}", message.sender, e);
                return ProcessResult::Error(ProcessorError::Responder(e));
            }
            Err(_elapsed) => {
                error!(
                    "Responder timed out for {} after {:?}",
                    message.sender, self.config.respond_timeout
                );
                return ProcessResult::Error(ProcessorError::Timeout(self.config.respond_timeout));
            }
        };

        match self.client.send(&reply).await {
            Ok(()) => {
                info!("Replied to {} in {}", message.sender, reply.channel);
                ProcessResult::Responded {
                    sender: message.sender.clone(),
                    channel: reply.channel,
                }
            }
            Err(e) => {
                error!("Failed to send reply to {}: {}", reply.channel, e);
                ProcessResult::Error(ProcessorError::Chat(e))
            }
        }
    }

    /// Run the processor over a stream of inbound messages.
    ///
    /// Individual processing errors are logged and do not stop the loop.
    /// Returns when the stream ends.
    pub async fn run<S>(self, stream: S) -> Result<(), ProcessorError>
    where
        S: Stream<Item = InboundMessage> + Send,
    {
        info!("Starting message processor with responder: {}", self.responder.name());

        tokio::pin!(stream);

        while let Some(message) = stream.next().await {
            match self.process_message(&message).await {
                ProcessResult::Responded { sender, channel } => {
                    debug!("Responded to {} in {}", sender, channel);
                }
                ProcessResult::Skipped { reason } => {
                    debug!("Skipped: {}", reason);
                }
                ProcessResult::Error(e) => {
                    warn!("Error processing message: {}", e);
                }
            }
        }

        info!("Message stream ended");
        Ok(())
    }

    /// Run the processor with graceful shutdown support.
    ///
    /// Runs until the provided shutdown signal completes or the message
    /// stream ends.
    pub async fn run_with_shutdown<S, F>(self, stream: S, shutdown_signal: F) -> Result<(), ProcessorError>
    where
        S: Stream<Item = InboundMessage> + Send,
        F: std::future::Future<Output = ()> + Send,
    {
        info!(
            "Starting message processor with responder: {} (graceful shutdown enabled)",
            self.responder.name()
        );

        tokio::pin!(stream);
        tokio::pin!(shutdown_signal);

        loop {
            tokio::select! {
                biased;

                () = &mut shutdown_signal => {
                    info!("Shutdown signal received, stopping message processor");
                    return Ok(());
                }

                message = stream.next() => {
                    match message {
                        Some(message) => {
                            match self.process_message(&message).await {
                                ProcessResult::Responded { sender, channel } => {
                                    debug!("Responded to {} in {}", sender, channel);
                                }
                                ProcessResult::Skipped { reason } => {
                                    debug!("Skipped: {}", reason);
                                }
                                ProcessResult::Error(e) => {
                                    warn!("Error processing message: {}", e);
                                }
                            }
                        }
                        None => {
                            info!("Message stream ended");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }

    /// Run the processor until Ctrl+C is pressed.
    ///
    /// Convenience wrapper around [`run_with_shutdown`](Self::run_with_shutdown)
    /// with the default Ctrl+C handler.
    #[cfg(feature = "signal")]
    pub async fn run_until_stopped<S>(self, stream: S) -> Result<(), ProcessorError>
    where
        S: Stream<Item = InboundMessage> + Send,
    {
        let shutdown = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for Ctrl+C");
        };
        self.run_with_shutdown(stream, shutdown).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bot_core::{async_trait, Reply};
    use futures::stream;
    use std::sync::{Arc, Mutex};

    /// Chat client that records everything it was asked to send.
    #[derive(Clone, Default)]
    struct RecordingChat {
        sent: Arc<Mutex<Vec<Reply>>>,
    }

    impl RecordingChat {
        fn sent(&self) -> Vec<Reply> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatClient for RecordingChat {
        async fn send(&self, reply: &Reply) -> Result<(), ChatError> {
            self.sent.lock().unwrap().push(reply.clone());
            Ok(())
        }
    }

    /// Chat client that always fails to deliver.
    struct BrokenChat;

    #[async_trait]
    impl ChatClient for BrokenChat {
        async fn send(&self, _reply: &Reply) -> Result<(), ChatError> {
            Err(ChatError("connection reset".to_string()))
        }
    }

    /// Responder that answers "!ping" with "pong", errors on "!boom",
    /// and ignores everything else.
    struct PingResponder;

    #[async_trait]
    impl Responder for PingResponder {
        async fn respond(&self, message: InboundMessage) -> Result<Option<Reply>, BotError> {
            match message.text.as_str() {
                "!ping" => Ok(Some(Reply::text_to(&message, "pong"))),
                "!boom" => Err(BotError::Provider("boom".to_string())),
                _ => Ok(None),
            }
        }

        fn name(&self) -> &str {
            "PingResponder"
        }

        fn acknowledge(&self, message: &InboundMessage) -> Option<Reply> {
            if message.text == "!ping" {
                Some(Reply::text_to(message, "pinging..."))
            } else {
                None
            }
        }
    }

    /// Responder that sleeps longer than any test timeout.
    struct SlowResponder;

    #[async_trait]
    impl Responder for SlowResponder {
        async fn respond(&self, message: InboundMessage) -> Result<Option<Reply>, BotError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Some(Reply::text_to(&message, "too late")))
        }

        fn name(&self) -> &str {
            "SlowResponder"
        }
    }

    fn message(sender: &str, text: &str) -> InboundMessage {
        InboundMessage::new(sender, "general", text, 1234567890)
    }

    #[tokio::test]
    async fn test_responds_and_sends_ack_first() {
        let chat = RecordingChat::default();
        let processor = MessageProcessor::with_defaults(chat.clone(), PingResponder);

        let result = processor.process_message(&message("user-1", "!ping")).await;
        assert!(matches!(result, ProcessResult::Responded { .. }));

        let sent = chat.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].text.as_deref(), Some("pinging..."));
        assert_eq!(sent[1].text.as_deref(), Some("pong"));
    }

    #[tokio::test]
    async fn test_acknowledgements_can_be_disabled() {
        let chat = RecordingChat::default();
        let mut config = ProcessorConfig::default();
        config.send_acknowledgements = false;
        let processor = MessageProcessor::new(chat.clone(), PingResponder, config);

        processor.process_message(&message("user-1", "!ping")).await;

        let sent = chat.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].text.as_deref(), Some("pong"));
    }

    #[tokio::test]
    async fn test_skips_message_from_self() {
        let chat = RecordingChat::default();
        let config = ProcessorConfig::with_bot_user("bot-id");
        let processor = MessageProcessor::new(chat.clone(), PingResponder, config);

        let result = processor.process_message(&message("bot-id", "!ping")).await;
        assert!(matches!(result, ProcessResult::Skipped { .. }));
        assert!(chat.sent().is_empty());
    }

    #[tokio::test]
    async fn test_skips_chatter() {
        let chat = RecordingChat::default();
        let processor = MessageProcessor::with_defaults(chat.clone(), PingResponder);

        let result = processor.process_message(&message("user-1", "hello")).await;
        match result {
            ProcessResult::Skipped { reason } => assert_eq!(reason, "not a command"),
            other => panic!("expected skip, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_responder_error_is_recorded() {
        let chat = RecordingChat::default();
        let processor = MessageProcessor::with_defaults(chat.clone(), PingResponder);

        let result = processor.process_message(&message("user-1", "!boom")).await;
        assert!(matches!(
            result,
            ProcessResult::Error(ProcessorError::Responder(_))
        ));
        assert!(chat.sent().is_empty());
    }

    #[tokio::test]
    async fn test_timeout() {
        let chat = RecordingChat::default();
        let mut config = ProcessorConfig::default();
        config.respond_timeout = Duration::from_millis(10);
        let processor = MessageProcessor::new(chat.clone(), SlowResponder, config);

        let result = processor.process_message(&message("user-1", "!ping")).await;
        assert!(matches!(
            result,
            ProcessResult::Error(ProcessorError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_send_failure() {
        let processor = MessageProcessor::with_defaults(BrokenChat, PingResponder);

        let result = processor.process_message(&message("user-1", "!ping")).await;
        assert!(matches!(
            result,
            ProcessResult::Error(ProcessorError::Chat(_))
        ));
    }

    #[tokio::test]
    async fn test_run_processes_stream_and_survives_errors() {
        let chat = RecordingChat::default();
        let processor = MessageProcessor::with_defaults(chat.clone(), PingResponder);

        let messages = stream::iter(vec![
            message("user-1", "!ping"),
            message("user-2", "!boom"),
            message("user-3", "chatter"),
            message("user-4", "!ping"),
        ]);

        processor.run(messages).await.unwrap();

        // Two acks and two pongs; the error and the chatter produce nothing.
        let sent = chat.sent();
        assert_eq!(sent.len(), 4);
        assert_eq!(sent[3].text.as_deref(), Some("pong"));
    }

    #[tokio::test]
    async fn test_run_with_shutdown_stops_on_signal() {
        let chat = RecordingChat::default();
        let processor = MessageProcessor::with_defaults(chat.clone(), PingResponder);

        // A stream that never ends; shutdown fires immediately.
        let messages = stream::pending::<InboundMessage>();
        processor
            .run_with_shutdown(messages, async {})
            .await
            .unwrap();

        assert!(chat.sent().is_empty());
    }
}
