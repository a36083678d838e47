//! Conversions from validated requests into domain parameters.

use uuid::Uuid;

use crate::{
    domain::{
        errors::DomainError,
        models::{
            MessageEventName, MessageEventParams, MessageIndexParams, MessageOutstandingParams,
            MessageReceiveParams, MessageSendParams,
        },
    },
    presentation::http::{
        requests::{MessageEvent, MessageIndex, MessageOutstanding, MessageReceive, MessageSend},
        validators::rules::parse_integer,
    },
};

pub fn map_message_send(request: &MessageSend) -> MessageSendParams {
    MessageSendParams {
        owner: request.from.clone(),
        contact: request.to.clone(),
        content: request.content.clone(),
    }
}

/// The receiving phone owns the conversation, so `to` becomes the owner.
pub fn map_message_receive(request: &MessageReceive) -> MessageReceiveParams {
    MessageReceiveParams {
        owner: request.to.clone(),
        contact: request.from.clone(),
        content: request.content.clone(),
        timestamp: request.timestamp,
    }
}

pub fn map_message_outstanding(
    request: &MessageOutstanding,
) -> Result<MessageOutstandingParams, DomainError> {
    Ok(MessageOutstandingParams {
        limit: parse_count("limit", &request.limit)?,
    })
}

pub fn map_message_index(request: &MessageIndex) -> Result<MessageIndexParams, DomainError> {
    Ok(MessageIndexParams {
        owner: request.to.clone(),
        contact: request.from.clone(),
        query: Some(request.query.clone()).filter(|query| !query.is_empty()),
        limit: parse_count("limit", &request.limit)?,
        skip: parse_count("skip", &request.skip)?,
    })
}

pub fn map_message_event(request: &MessageEvent) -> Result<MessageEventParams, DomainError> {
    let message_id = Uuid::try_parse(&request.message_id).map_err(|err| {
        DomainError::Validation(format!("messageID {:?}: {err}", request.message_id))
    })?;
    let event_name = MessageEventName::from_str(&request.event_name)
        .ok_or_else(|| DomainError::UnknownEventName(request.event_name.clone()))?;

    Ok(MessageEventParams {
        message_id,
        event_name,
        timestamp: request.timestamp,
    })
}

/// Uses the validator's numeric parsing so every accepted count maps.
fn parse_count(field: &str, value: &str) -> Result<u64, DomainError> {
    parse_integer(value)
        .and_then(|number| u64::try_from(number).ok())
        .ok_or_else(|| {
            DomainError::Validation(format!("{field} {value:?} is not a non-negative integer"))
        })
}
