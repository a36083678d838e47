use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery events a phone can report back for a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageEventName {
    Sent,
    Failed,
    Delivered,
}

impl MessageEventName {
    pub const ALL: [MessageEventName; 3] = [
        MessageEventName::Sent,
        MessageEventName::Failed,
        MessageEventName::Delivered,
    ];

    /// Wire names accepted for `event_name`, in the same order as [`Self::ALL`].
    pub const NAMES: &'static [&'static str] = &["sent", "failed", "delivered"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageEventName::Sent => "sent",
            MessageEventName::Failed => "failed",
            MessageEventName::Delivered => "delivered",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "sent" => Some(MessageEventName::Sent),
            "failed" => Some(MessageEventName::Failed),
            "delivered" => Some(MessageEventName::Delivered),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSendParams {
    pub owner: String,
    pub contact: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReceiveParams {
    pub owner: String,
    pub contact: String,
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageOutstandingParams {
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageIndexParams {
    pub owner: String,
    pub contact: String,
    pub query: Option<String>,
    pub limit: u64,
    pub skip: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEventParams {
    pub message_id: Uuid,
    pub event_name: MessageEventName,
    pub timestamp: Option<DateTime<Utc>>,
}
