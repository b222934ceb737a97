//! Rendering port for the chat widget.
//!
//! A `ChatView` is whatever draws the panel: a terminal, a web page bridge,
//! or a recorder in tests. Calls arrive from the controller and from reveal
//! tasks, so implementations must be thread-safe and must not call back
//! into the controller.

use fizzbit_types::chat::ChatRole;

use super::state::{MessageId, Mood};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

pub trait ChatView: Send + Sync {
    /// Show the panel and overlay; hide the mascot.
    fn show_panel(&self);

    fn focus_input(&self);

    /// Start the exit animation. The panel stays on screen until `hide_panel`.
    fn begin_close(&self);

    /// Remove the panel and show the mascot again.
    fn hide_panel(&self);

    /// Add a message element. Bot messages start empty and are filled by
    /// `set_message_text`.
    fn append_message(&self, id: MessageId, role: ChatRole, text: &str);

    fn set_message_text(&self, id: MessageId, text: &str);

    /// The reveal of `id` reached its full text (not called on cancel).
    fn message_revealed(&self, _id: MessageId) {}

    fn scroll_to_bottom(&self);

    fn clear_input(&self);

    /// Loading indicator on, send control disabled (or the reverse).
    fn set_loading(&self, loading: bool);

    fn set_mood(&self, mood: Mood);

    fn notice(&self, notice: &Notice);
}

#[cfg(test)]
pub(crate) mod recording {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum ViewEvent {
        ShowPanel,
        FocusInput,
        BeginClose,
        HidePanel,
        Append(MessageId, ChatRole, String),
        SetText(MessageId, String),
        Revealed(MessageId),
        Scroll,
        ClearInput,
        Loading(bool),
        Mood(Mood),
        Notice(Notice),
    }

    /// View that records every call in order.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingView {
        events: Mutex<Vec<ViewEvent>>,
    }

    impl RecordingView {
        fn record(&self, event: ViewEvent) {
            self.events.lock().unwrap().push(event);
        }

        pub(crate) fn events(&self) -> Vec<ViewEvent> {
            self.events.lock().unwrap().clone()
        }

        pub(crate) fn count(&self, wanted: &ViewEvent) -> usize {
            self.events().iter().filter(|e| *e == wanted).count()
        }

        pub(crate) fn scroll_count(&self) -> usize {
            self.count(&ViewEvent::Scroll)
        }

        pub(crate) fn notices(&self) -> Vec<Notice> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    ViewEvent::Notice(n) => Some(n),
                    _ => None,
                })
                .collect()
        }

        /// Every text set on `id`, in order, excluding the initial append.
        pub(crate) fn texts_for(&self, id: MessageId) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    ViewEvent::SetText(i, t) if i == id => Some(t),
                    _ => None,
                })
                .collect()
        }

        /// What message `id` currently displays.
        pub(crate) fn text_of(&self, id: MessageId) -> Option<String> {
            self.events().into_iter().rev().find_map(|e| match e {
                ViewEvent::SetText(i, t) if i == id => Some(t),
                ViewEvent::Append(i, _, t) if i == id => Some(t),
                _ => None,
            })
        }

        pub(crate) fn last_mood(&self) -> Option<Mood> {
            self.events().into_iter().rev().find_map(|e| match e {
                ViewEvent::Mood(m) => Some(m),
                _ => None,
            })
        }
    }

    impl ChatView for RecordingView {
        fn show_panel(&self) {
            self.record(ViewEvent::ShowPanel);
        }

        fn focus_input(&self) {
            self.record(ViewEvent::FocusInput);
        }

        fn begin_close(&self) {
            self.record(ViewEvent::BeginClose);
        }

        fn hide_panel(&self) {
            self.record(ViewEvent::HidePanel);
        }

        fn append_message(&self, id: MessageId, role: ChatRole, text: &str) {
            self.record(ViewEvent::Append(id, role, text.to_string()));
        }

        fn set_message_text(&self, id: MessageId, text: &str) {
            self.record(ViewEvent::SetText(id, text.to_string()));
        }

        fn message_revealed(&self, id: MessageId) {
            self.record(ViewEvent::Revealed(id));
        }

        fn scroll_to_bottom(&self) {
            self.record(ViewEvent::Scroll);
        }

        fn clear_input(&self) {
            self.record(ViewEvent::ClearInput);
        }

        fn set_loading(&self, loading: bool) {
            self.record(ViewEvent::Loading(loading));
        }

        fn set_mood(&self, mood: Mood) {
            self.record(ViewEvent::Mood(mood));
        }

        fn notice(&self, notice: &Notice) {
            self.record(ViewEvent::Notice(notice.clone()));
        }
    }
}
