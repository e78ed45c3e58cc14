use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Conversation};
use crate::ports::Oracle;

/// A message the fake received, with the history length it saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub message: String,
    pub history_len: usize,
}

/// Scripted oracle: answers from a queue, then falls back to a default reply.
#[derive(Clone)]
pub struct FakeOracle {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
    replies: Arc<Mutex<VecDeque<Result<String, String>>>>,
    default_reply: String,
}

impl FakeOracle {
    pub fn new(default_reply: impl Into<String>) -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            replies: Arc::new(Mutex::new(VecDeque::new())),
            default_reply: default_reply.into(),
        }
    }

    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fake = Self::new("");
        fake.replies.lock().unwrap().extend(replies.into_iter().map(|r| Ok(r.into())));
        fake
    }

    /// Queue a failure for the next unanswered call.
    pub fn push_failure(&self, reason: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Err(reason.into()));
    }

    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Oracle for FakeOracle {
    fn send(&self, conversation: &mut Conversation, message: &str) -> Result<String, AppError> {
        self.sent
            .lock()
            .unwrap()
            .push(SentMessage { message: message.to_string(), history_len: conversation.len() });

        let reply = self.replies.lock().unwrap().pop_front();
        let reply = match reply {
            Some(Ok(reply)) => reply,
            Some(Err(reason)) => return Err(AppError::OracleRequest(reason)),
            None => self.default_reply.clone(),
        };

        conversation.record_exchange(message, reply.clone());
        Ok(reply)
    }
}
