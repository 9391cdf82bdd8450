//! Rule-based HR assistant: maps the last message of a conversation to one
//! of a fixed set of canned replies.

pub mod domain;
pub mod responder;

pub use domain::{ChatError, ChatMessage, ChatReply, ChatRequest};
pub use responder::{respond, Intent};
