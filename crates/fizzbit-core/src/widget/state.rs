//! Chat panel state machine.
//!
//! ```text
//!            open                 submit
//!   Closed ───────▶ OpenIdle ───────────▶ OpenAwaiting
//!      ▲   ◀───────    ▲                      │
//!      │     close     └──────────────────────┘
//!                          reply / failure
//! ```
//!
//! Open and close are refused while a reply is awaited.

use fizzbit_types::chat::ChatMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    OpenIdle,
    OpenAwaiting,
}

/// Expression shown on the mascot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Thinking,
    Sad,
}

/// Index of a message in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub usize);

/// Everything the widget remembers for its lifetime.
#[derive(Debug, Clone)]
pub struct ChatSession {
    state: PanelState,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            state: PanelState::Closed,
            messages: Vec::new(),
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != PanelState::Closed
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.state == PanelState::OpenAwaiting
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push(&mut self, message: ChatMessage) -> MessageId {
        self.messages.push(message);
        MessageId(self.messages.len() - 1)
    }

    /// `Closed → OpenIdle`. Returns whether the state changed.
    pub fn open(&mut self) -> bool {
        if self.state == PanelState::Closed {
            self.state = PanelState::OpenIdle;
            true
        } else {
            false
        }
    }

    /// `OpenIdle → Closed`. Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        if self.state == PanelState::OpenIdle {
            self.state = PanelState::Closed;
            true
        } else {
            false
        }
    }

    /// `OpenIdle → OpenAwaiting`. Returns whether the state changed.
    pub fn begin_request(&mut self) -> bool {
        if self.state == PanelState::OpenIdle {
            self.state = PanelState::OpenAwaiting;
            true
        } else {
            false
        }
    }

    /// `OpenAwaiting → OpenIdle`. Returns whether the state changed.
    pub fn finish_request(&mut self) -> bool {
        if self.state == PanelState::OpenAwaiting {
            self.state = PanelState::OpenIdle;
            true
        } else {
            false
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
