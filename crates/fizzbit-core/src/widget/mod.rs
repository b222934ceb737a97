//! Client-side chat widget.
//!
//! The widget is a headless state machine: [`ChatController`] owns the
//! [`state::ChatSession`] and the input control, talks to the gateway through
//! a [`transport::MessageTransport`], and draws through a [`view::ChatView`].
//! Every timer it starts (close transition, reveal animation, greeting) is a
//! [`timer::TimerHandle`] that can be cancelled.

pub mod controller;
pub mod copy;
pub mod input;
pub mod reveal;
pub mod state;
pub mod substitution;
pub mod timer;
pub mod transport;
pub mod view;

pub use controller::{ChatController, PendingReply, SubmitOutcome};
pub use state::{Mood, PanelState};
