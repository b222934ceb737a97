//! Interactive terminal chat with Fizzbit.
//!
//! The terminal is one more [`ChatView`](fizzbit_core::widget::view::ChatView)
//! for the widget controller: slash commands stand in for the mascot and
//! close controls, and replies are revealed into the transcript as they are
//! on the web page. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod view;
