//! Chat transcript state: user/bot turns plus the opaque context string
//! the assistant service threads between requests.

pub const FALLBACK_REPLY: &str =
    "Sorry, I am unable to respond at the moment. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// One running conversation with the assistant service.
///
/// `context` is returned by the service with every reply and echoed back on
/// the next request; the dashboard never interprets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    context: String,
    pending: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// A request is in flight; the input stays disabled until a reply or
    /// failure arrives.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record the user's turn and mark the conversation pending.
    /// Blank input or an already-pending conversation is rejected.
    pub fn push_user(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.pending {
            return false;
        }
        self.messages.push(ChatMessage { sender: Sender::User, text: text.to_string() });
        self.pending = true;
        true
    }

    /// Apply the service reply, adopting its new context.
    pub fn apply_reply(&mut self, reply: String, context: String) {
        self.messages.push(ChatMessage { sender: Sender::Bot, text: reply });
        self.context = context;
        self.pending = false;
    }

    /// The request failed; show the canned apology and keep the old
    /// context so the next attempt resumes the same thread.
    pub fn apply_failure(&mut self) {
        self.messages
            .push(ChatMessage { sender: Sender::Bot, text: FALLBACK_REPLY.to_string() });
        self.pending = false;
    }
}
