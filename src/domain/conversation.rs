use serde::Serialize;

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

/// Conversation handle passed to every oracle call.
///
/// History is append-only and grows by one user/model pair per successful exchange,
/// so later prompts are answered with earlier ones in view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Completed prompt/response exchanges.
    pub fn exchanges(&self) -> usize {
        self.turns.len() / 2
    }

    /// Record a completed exchange.
    pub fn record_exchange(&mut self, message: impl Into<String>, reply: impl Into<String>) {
        self.turns.push(Turn { role: Role::User, text: message.into() });
        self.turns.push(Turn { role: Role::Model, text: reply.into() });
    }
}
