//! Message types shared between chat transports and responders.

use serde::{Deserialize, Serialize};

/// An incoming chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Platform identifier of the sender.
    pub sender: String,

    /// Channel the message arrived in. Replies go back here.
    pub channel: String,

    /// Raw message text as typed by the user.
    pub text: String,

    /// Platform timestamp of the message.
    pub timestamp: u64,
}

impl InboundMessage {
    /// Create a message that arrived in a channel.
    pub fn new(
        sender: impl Into<String>,
        channel: impl Into<String>,
        text: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            sender: sender.into(),
            channel: channel.into(),
            text: text.into(),
            timestamp,
        }
    }

    /// Create a direct message. The reply channel is the sender.
    pub fn direct(sender: impl Into<String>, text: impl Into<String>, timestamp: u64) -> Self {
        let sender = sender.into();
        Self {
            channel: sender.clone(),
            sender,
            text: text.into(),
            timestamp,
        }
    }
}

/// An outgoing reply: plain text, an embed, or both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Channel to deliver the reply to.
    pub channel: String,

    /// Plain text content.
    pub text: Option<String>,

    /// Rich embed content.
    pub embed: Option<Embed>,
}

impl Reply {
    /// Create a plain-text reply to the channel a message arrived in.
    pub fn text_to(message: &InboundMessage, text: impl Into<String>) -> Self {
        Self {
            channel: message.channel.clone(),
            text: Some(text.into()),
            embed: None,
        }
    }

    /// Create an embed reply to the channel a message arrived in.
    pub fn embed_to(message: &InboundMessage, embed: Embed) -> Self {
        Self {
            channel: message.channel.clone(),
            text: None,
            embed: Some(embed),
        }
    }
}

/// A rich embed: a titled card with an optional image, link, and fields.
///
/// Kept platform-neutral; transports map it onto whatever rich-message
/// format their platform supports, or render it as text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embed {
    /// Embed title.
    pub title: String,
    /// Body text under the title.
    pub description: Option<String>,
    /// Link the title points at.
    pub url: Option<String>,
    /// Accent color as 0xRRGGBB.
    pub color: Option<u32>,
    /// URL of the embedded image.
    pub image_url: Option<String>,
    /// Name/value field pairs.
    pub fields: Vec<EmbedField>,
    /// Footer text.
    pub footer: Option<String>,
}

/// A single name/value field in an [`Embed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedField {
    /// Field label.
    pub name: String,
    /// Field content.
    pub value: String,
    /// Whether the field may share a row with its neighbors.
    pub inline: bool,
}

impl Embed {
    /// Create an embed with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Set the link URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the accent color.
    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the embedded image URL.
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Set the footer text.
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }
}
