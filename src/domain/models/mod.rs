pub mod message;

pub use message::{
    MessageEventName, MessageEventParams, MessageIndexParams, MessageOutstandingParams,
    MessageReceiveParams, MessageSendParams,
};
