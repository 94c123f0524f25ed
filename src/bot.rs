//! Webhook wire types, kept chat-platform neutral.
//!
//! An inbound update carries the sender identity plus either typed text or
//! an echoed button token. The reply carries text plus optional inline
//! buttons; delivery and keyboard rendering belong to the chat platform.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundUpdate {
    pub sender: Sender,
    /// Typed message or command, when the user sent text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Echoed button token, when the user tapped an inline button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sender {
    /// External chat identity, stable across interactions
    pub id: i64,
    pub first_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub label: String,
    /// Opaque token echoed back verbatim when the button is tapped
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundReply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Vec<InlineButton>>,
}

impl OutboundReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            buttons: Vec::new(),
        }
    }

    /// One button per row, the keyboard layout the trainer always uses.
    pub fn with_buttons(text: impl Into<String>, buttons: Vec<InlineButton>) -> Self {
        Self {
            text: text.into(),
            buttons: buttons.into_iter().map(|b| vec![b]).collect(),
        }
    }
}
