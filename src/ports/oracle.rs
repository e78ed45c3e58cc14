//! Language model port definition.

use crate::domain::{AppError, Conversation};

/// Port for the hosted language model.
///
/// `send` answers `message` with the conversation's history in view. On success the
/// implementation appends the message and its reply to `conversation`; on failure the
/// conversation is left untouched.
pub trait Oracle {
    fn send(&self, conversation: &mut Conversation, message: &str) -> Result<String, AppError>;
}

impl<O: Oracle + ?Sized> Oracle for &O {
    fn send(&self, conversation: &mut Conversation, message: &str) -> Result<String, AppError> {
        (**self).send(conversation, message)
    }
}
