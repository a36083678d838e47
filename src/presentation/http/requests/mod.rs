//! Request payloads accepted by the message endpoints.
//!
//! Every field is carried as the raw string the client sent; missing fields
//! default to empty so that the validators, not the JSON parser, report them.

use chrono::{DateTime, Utc};
use poem_openapi::Object;

/// A message received by a phone and forwarded to the gateway.
#[derive(Object, Debug, Clone, Default, PartialEq, Eq)]
#[oai(rename_all = "snake_case")]
pub struct MessageReceive {
    #[oai(default)]
    pub from: String,
    #[oai(default)]
    pub to: String,
    #[oai(default)]
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// A message to be sent out through a phone.
#[derive(Object, Debug, Clone, Default, PartialEq, Eq)]
#[oai(rename_all = "snake_case")]
pub struct MessageSend {
    #[oai(default)]
    pub from: String,
    #[oai(default)]
    pub to: String,
    #[oai(default)]
    pub content: String,
}

/// Poll for messages still waiting to be sent.
#[derive(Object, Debug, Clone, Default, PartialEq, Eq)]
#[oai(rename_all = "snake_case")]
pub struct MessageOutstanding {
    #[oai(default)]
    pub limit: String,
}

/// One page of the conversation between an owner (`to`) and a contact (`from`).
#[derive(Object, Debug, Clone, Default, PartialEq, Eq)]
#[oai(rename_all = "snake_case")]
pub struct MessageIndex {
    #[oai(default)]
    pub skip: String,
    #[oai(default)]
    pub limit: String,
    #[oai(default)]
    pub query: String,
    #[oai(default)]
    pub from: String,
    #[oai(default)]
    pub to: String,
}

/// Delivery event reported by a phone for a message.
#[derive(Object, Debug, Clone, Default, PartialEq, Eq)]
#[oai(rename_all = "snake_case")]
pub struct MessageEvent {
    #[oai(default)]
    pub event_name: String,
    #[oai(rename = "messageID", default)]
    pub message_id: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl MessageReceive {
    pub fn sanitize(self) -> Self {
        Self {
            from: sanitize_address(&self.from),
            to: sanitize_address(&self.to),
            content: self.content.trim().to_string(),
            timestamp: self.timestamp,
        }
    }
}

impl MessageSend {
    pub fn sanitize(self) -> Self {
        Self {
            from: sanitize_address(&self.from),
            to: sanitize_address(&self.to),
            content: self.content.trim().to_string(),
        }
    }
}

impl MessageOutstanding {
    pub fn sanitize(self) -> Self {
        Self {
            limit: self.limit.trim().to_string(),
        }
    }
}

impl MessageIndex {
    pub fn sanitize(self) -> Self {
        Self {
            skip: self.skip.trim().to_string(),
            limit: self.limit.trim().to_string(),
            query: self.query.trim().to_string(),
            from: self.from.trim().to_string(),
            to: sanitize_address(&self.to),
        }
    }
}

impl MessageEvent {
    pub fn sanitize(self) -> Self {
        Self {
            event_name: self.event_name.trim().to_string(),
            message_id: self.message_id.trim().to_string(),
            timestamp: self.timestamp,
        }
    }
}

/// Normalizes a phone number taken from a body or a query string.
///
/// An unescaped `+` in a query string decodes to a space, so leading spaces
/// are read as the lost plus sign.
fn sanitize_address(value: &str) -> String {
    let value = value.trim_end();
    let digits = value.trim_start();
    if digits.is_empty() {
        return String::new();
    }

    if digits.starts_with('+') {
        digits.to_string()
    } else {
        format!("+{digits}")
    }
}
