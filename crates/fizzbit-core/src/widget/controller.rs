//! The chat widget controller.
//!
//! `ChatController` is the only owner of the widget's state. Handlers call
//! its methods; it updates the [`ChatSession`], drives the [`ChatView`], and
//! runs the gateway request and reveal animations as background tasks.
//!
//! Must be used from inside a tokio runtime: `start`, `close` and `submit`
//! spawn tasks.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

use fizzbit_types::chat::{ChatExchange, ChatMessage, ChatRole, ErrorCategory};
use fizzbit_types::config::WidgetConfig;
use fizzbit_types::error::TransportError;

use super::copy::{
    too_long_warning, BUSY_NOTICE, EMPTY_INPUT_WARNING, GENERIC_FAILURE, GREETING, NETWORK_FAILURE,
};
use super::input::InputBox;
use super::reveal::{start_reveal, RevealHandle};
use super::state::{ChatSession, Mood, PanelState};
use super::substitution::effective_input;
use super::timer::{schedule_once, TimerHandle, TimerSet};
use super::transport::{GatewayReply, MessageTransport};
use super::view::{ChatView, Notice};

/// Result of a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The panel is closed; nothing happened.
    PanelClosed,
    /// Trimmed input was empty; a warning was shown.
    Empty,
    /// A reply is already awaited; an info notice was shown.
    Busy,
    /// The request is in flight.
    Sent(PendingReply),
}

/// Handle on an in-flight gateway request. Dropping it does not cancel the
/// request.
#[derive(Debug)]
pub struct PendingReply {
    task: JoinHandle<ChatExchange>,
}

impl PendingReply {
    /// Wait until the reply has been rendered (its reveal has started).
    pub async fn finished(self) -> Option<ChatExchange> {
        self.task.await.ok()
    }
}

struct Inner {
    session: ChatSession,
    input: InputBox,
    mood: Mood,
    closing: Option<TimerHandle>,
    close_generation: u64,
    timers: TimerSet,
    reveals: Vec<RevealHandle>,
}

pub struct ChatController<T> {
    inner: Arc<Mutex<Inner>>,
    transport: Arc<T>,
    view: Arc<dyn ChatView>,
    config: Arc<WidgetConfig>,
}

impl<T> Clone for ChatController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            transport: Arc::clone(&self.transport),
            view: Arc::clone(&self.view),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T: MessageTransport> ChatController<T> {
    pub fn new(transport: T, view: Arc<dyn ChatView>, config: WidgetConfig) -> Self {
        let inner = Inner {
            session: ChatSession::new(),
            input: InputBox::new(config.input_cap()),
            mood: Mood::Happy,
            closing: None,
            close_generation: 0,
            timers: TimerSet::new(),
            reveals: Vec::new(),
        };

        Self {
            inner: Arc::new(Mutex::new(inner)),
            transport: Arc::new(transport),
            view,
            config: Arc::new(config),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Page-load behaviour: happy mascot, and a welcome message after the
    /// greeting delay if nothing has been said by then.
    pub fn start(&self) {
        let mut inner = self.lock();
        self.set_mood(&mut inner, Mood::Happy);

        let this = self.clone();
        let greeting = schedule_once(self.config.greeting_delay(), move || {
            let mut inner = this.lock();
            if inner.session.messages().is_empty() {
                this.add_bot_message(&mut inner, GREETING.to_string());
            }
        });
        inner.timers.track(greeting);
    }

    pub fn state(&self) -> PanelState {
        self.lock().session.state()
    }

    pub fn mood(&self) -> Mood {
        self.lock().mood
    }

    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.lock().session.messages().to_vec()
    }

    pub fn input_value(&self) -> String {
        self.lock().input.value().to_string()
    }

    pub fn is_revealing(&self) -> bool {
        self.lock().reveals.iter().any(|r| !r.is_finished())
    }

    /// Mascot click or open command.
    pub fn open(&self) -> bool {
        let mut inner = self.lock();
        self.open_locked(&mut inner)
    }

    /// Close control, overlay click, or escape command.
    pub fn close(&self) -> bool {
        let mut inner = self.lock();
        self.close_locked(&mut inner)
    }

    /// Flip between open and closed. Returns the resulting state, which is
    /// unchanged while a reply is awaited.
    pub fn toggle(&self) -> PanelState {
        let mut inner = self.lock();
        match inner.session.state() {
            PanelState::Closed => {
                self.open_locked(&mut inner);
            }
            PanelState::OpenIdle => {
                self.close_locked(&mut inner);
            }
            PanelState::OpenAwaiting => {}
        }
        inner.session.state()
    }

    fn open_locked(&self, inner: &mut Inner) -> bool {
        if !inner.session.open() {
            return false;
        }
        inner.close_generation += 1;
        if let Some(closing) = inner.closing.take() {
            closing.cancel();
        }
        self.view.show_panel();
        self.view.focus_input();
        true
    }

    fn close_locked(&self, inner: &mut Inner) -> bool {
        if !inner.session.close() {
            return false;
        }
        inner.close_generation += 1;
        let generation = inner.close_generation;
        self.view.begin_close();

        let this = self.clone();
        let hide = schedule_once(self.config.close_transition(), move || {
            let mut inner = this.lock();
            if inner.close_generation == generation
                && inner.session.state() == PanelState::Closed
            {
                this.view.hide_panel();
                inner.closing = None;
            }
        });
        if let Some(stale) = inner.closing.replace(hide) {
            stale.cancel();
        }
        true
    }

    /// Edit-control change. Returns `true` if the text was truncated, in
    /// which case one warning was shown.
    pub fn set_input(&self, text: &str) -> bool {
        let mut inner = self.lock();
        let truncated = inner.input.set(text);
        if truncated {
            self.view
                .notice(&Notice::warning(too_long_warning(inner.input.max_chars())));
        }
        truncated
    }

    /// Send the current input.
    pub fn submit(&self) -> SubmitOutcome {
        let mut inner = self.lock();
        if !inner.session.is_open() {
            return SubmitOutcome::PanelClosed;
        }

        let raw = inner.input.value().trim().to_string();
        if raw.is_empty() {
            self.view.notice(&Notice::warning(EMPTY_INPUT_WARNING));
            return SubmitOutcome::Empty;
        }
        if !inner.session.begin_request() {
            self.view.notice(&Notice::info(BUSY_NOTICE));
            return SubmitOutcome::Busy;
        }

        let exchange = ChatExchange::new(raw.clone(), effective_input(&raw));
        let id = inner.session.push(ChatMessage::user(raw.clone()));
        self.view.append_message(id, ChatRole::User, &raw);
        self.view.scroll_to_bottom();
        inner.input.clear();
        self.view.clear_input();
        self.view.set_loading(true);
        self.set_mood(&mut inner, Mood::Thinking);
        drop(inner);

        tracing::debug!(
            substituted = exchange.was_substituted(),
            chars = exchange.effective_input.chars().count(),
            "Sending chat message"
        );

        let this = self.clone();
        let task = tokio::spawn(async move {
            let result = this.transport.send(&exchange.effective_input).await;
            this.complete_exchange(exchange, result)
        });

        SubmitOutcome::Sent(PendingReply { task })
    }

    fn complete_exchange(
        &self,
        mut exchange: ChatExchange,
        result: Result<GatewayReply, TransportError>,
    ) -> ChatExchange {
        let (text, mood) = match result {
            Ok(reply) if reply.is_success() => match reply.body.response {
                Some(text) if !text.is_empty() => {
                    exchange.response_text = Some(text.clone());
                    (text, Mood::Happy)
                }
                _ => {
                    tracing::warn!("Gateway reported success without a response");
                    exchange.error_category = Some(ErrorCategory::UpstreamError);
                    (GENERIC_FAILURE.to_string(), Mood::Sad)
                }
            },
            Ok(reply) => {
                let category = ErrorCategory::from_status(reply.status)
                    .unwrap_or(ErrorCategory::UpstreamError);
                tracing::warn!(status = reply.status, %category, "Gateway returned a failure");
                exchange.error_category = Some(category);
                exchange.response_text = reply.body.response.clone();

                let text = reply
                    .body
                    .response
                    .filter(|t| !t.is_empty())
                    .or(reply.body.error.filter(|t| !t.is_empty()))
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string());
                (text, Mood::Sad)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Gateway unreachable");
                (NETWORK_FAILURE.to_string(), Mood::Sad)
            }
        };

        let mut inner = self.lock();
        self.set_mood(&mut inner, mood);
        self.add_bot_message(&mut inner, text);
        inner.session.finish_request();
        self.view.set_loading(false);
        exchange
    }

    fn add_bot_message(&self, inner: &mut Inner, text: String) {
        let id = inner.session.push(ChatMessage::bot(text.clone()));
        self.view.append_message(id, ChatRole::Bot, "");
        self.view.scroll_to_bottom();

        inner.reveals.retain(|r| !r.is_finished());
        inner.reveals.push(start_reveal(
            Arc::clone(&self.view),
            id,
            text,
            self.config.reveal_interval(),
        ));
    }

    fn set_mood(&self, inner: &mut Inner, mood: Mood) {
        inner.mood = mood;
        self.view.set_mood(mood);
    }

    /// Finish every running reveal immediately.
    pub fn skip_reveal(&self) {
        for reveal in &self.lock().reveals {
            reveal.skip();
        }
    }

    /// Cancel every pending timer: greeting, close transition, reveals.
    /// An in-flight gateway request still completes.
    pub fn shutdown(&self) {
        let mut inner = self.lock();
        inner.timers.cancel_all();
        if let Some(closing) = inner.closing.take() {
            closing.cancel();
        }
        for reveal in inner.reveals.drain(..) {
            reveal.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::time::Duration;

    use tokio::sync::Notify;

    use fizzbit_types::api::ChatReplyBody;

    use super::super::state::MessageId;
    use super::super::substitution::ELABORATED_PROMPT;
    use super::super::view::recording::{RecordingView, ViewEvent};
    use super::super::view::NoticeLevel;
    use super::*;

    #[derive(Default)]
    struct FakeTransport {
        sent: Mutex<Vec<String>>,
        replies: Mutex<VecDeque<Result<GatewayReply, TransportError>>>,
        gate: Option<Arc<Notify>>,
    }

    impl FakeTransport {
        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl MessageTransport for FakeTransport {
        async fn send(&self, message: &str) -> Result<GatewayReply, TransportError> {
            self.sent.lock().unwrap().push(message.to_string());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_string())))
        }
    }

    fn success(text: &str) -> Result<GatewayReply, TransportError> {
        Ok(GatewayReply::new(
            200,
            ChatReplyBody {
                success: true,
                response: Some(text.to_string()),
                error: None,
            },
        ))
    }

    fn failure(
        status: u16,
        error: &str,
        response: Option<&str>,
    ) -> Result<GatewayReply, TransportError> {
        Ok(GatewayReply::new(
            status,
            ChatReplyBody {
                success: false,
                response: response.map(str::to_string),
                error: Some(error.to_string()),
            },
        ))
    }

    fn widget(
        replies: Vec<Result<GatewayReply, TransportError>>,
        gate: Option<Arc<Notify>>,
    ) -> (ChatController<FakeTransport>, Arc<RecordingView>) {
        let transport = FakeTransport {
            replies: Mutex::new(replies.into()),
            gate,
            ..Default::default()
        };
        let view = Arc::new(RecordingView::default());
        let controller = ChatController::new(transport, view.clone(), WidgetConfig::default());
        (controller, view)
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_widget_config_is_clamped() {
        let config = WidgetConfig {
            reveal_interval_ms: 0,
            max_input_chars: 2000,
            ..Default::default()
        };
        let view = Arc::new(RecordingView::default());
        let transport = FakeTransport {
            replies: Mutex::new(vec![success("ring ring 🪐")].into()),
            ..Default::default()
        };
        let controller = ChatController::new(transport, view.clone(), config);
        controller.open();

        assert!(controller.set_input(&"a".repeat(600)));
        assert_eq!(controller.input_value().chars().count(), 500);

        send(&controller, "hi").await;
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(view.text_of(MessageId(1)).as_deref(), Some("ring ring 🪐"));
        assert!(!controller.is_revealing());
    }

    async fn send(controller: &ChatController<FakeTransport>, text: &str) -> ChatExchange {
        controller.set_input(text);
        match controller.submit() {
            SubmitOutcome::Sent(pending) => pending.finished().await.unwrap(),
            other => panic!("expected Sent, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_open_focuses_input_and_close_hides_after_transition() {
        let (controller, view) = widget(vec![], None);

        assert!(controller.open());
        assert_eq!(controller.state(), PanelState::OpenIdle);
        assert_eq!(view.events(), vec![ViewEvent::ShowPanel, ViewEvent::FocusInput]);

        assert!(controller.close());
        assert_eq!(controller.state(), PanelState::Closed);
        assert_eq!(view.count(&ViewEvent::BeginClose), 1);
        assert_eq!(view.count(&ViewEvent::HidePanel), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_transition_window() {
        let (controller, view) = widget(vec![], None);
        controller.open();
        controller.close();

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert_eq!(view.count(&ViewEvent::HidePanel), 0);

        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(view.count(&ViewEvent::HidePanel), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reopen_during_close_transition_cancels_hide() {
        let (controller, view) = widget(vec![], None);
        controller.open();
        controller.close();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(controller.open());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(view.count(&ViewEvent::HidePanel), 0);
        assert_eq!(controller.state(), PanelState::OpenIdle);
    }

    #[tokio::test]
    async fn test_toggle_flips_state() {
        let (controller, _view) = widget(vec![], None);
        assert_eq!(controller.toggle(), PanelState::OpenIdle);
        assert_eq!(controller.toggle(), PanelState::Closed);
    }

    #[tokio::test]
    async fn test_empty_submit_is_noop() {
        let (controller, view) = widget(vec![success("unused")], None);
        controller.open();

        for blank in ["", "   ", "\n\t"] {
            controller.set_input(blank);
            assert!(matches!(controller.submit(), SubmitOutcome::Empty));
        }

        assert!(controller.transport().sent().is_empty());
        assert!(controller.transcript().is_empty());
        assert_eq!(controller.state(), PanelState::OpenIdle);
        let notices = view.notices();
        assert_eq!(notices.len(), 3);
        assert!(notices.iter().all(|n| n.level == NoticeLevel::Warning));
        assert_eq!(notices[0].text, EMPTY_INPUT_WARNING);
    }

    #[tokio::test]
    async fn test_submit_while_closed_does_nothing() {
        let (controller, view) = widget(vec![success("unused")], None);
        controller.set_input("hello");
        assert!(matches!(controller.submit(), SubmitOutcome::PanelClosed));
        assert!(controller.transport().sent().is_empty());
        assert!(view.events().is_empty());
    }

    #[tokio::test]
    async fn test_truncation_warns_once_per_event() {
        let (controller, view) = widget(vec![], None);

        assert!(controller.set_input(&"a".repeat(600)));
        assert_eq!(controller.input_value().chars().count(), 500);
        assert_eq!(view.notices().len(), 1);

        assert!(!controller.set_input("short"));
        assert_eq!(view.notices().len(), 1);

        assert!(controller.set_input(&"b".repeat(501)));
        assert_eq!(controller.input_value(), "b".repeat(500));
        let notices = view.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[1].level, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn test_second_submit_while_awaiting_is_rejected() {
        let gate = Arc::new(Notify::new());
        let (controller, view) = widget(vec![success("one"), success("two")], Some(gate.clone()));
        controller.open();

        controller.set_input("first");
        let pending = match controller.submit() {
            SubmitOutcome::Sent(p) => p,
            other => panic!("expected Sent, got {other:?}"),
        };
        assert_eq!(controller.state(), PanelState::OpenAwaiting);

        controller.set_input("second");
        assert!(matches!(controller.submit(), SubmitOutcome::Busy));
        assert!(view
            .notices()
            .iter()
            .any(|n| n.text == BUSY_NOTICE && n.level == NoticeLevel::Info));

        gate.notify_one();
        pending.finished().await.unwrap();

        assert_eq!(controller.transport().sent(), vec!["first".to_string()]);
        assert_eq!(controller.state(), PanelState::OpenIdle);
        assert_eq!(controller.input_value(), "second");
    }

    #[tokio::test]
    async fn test_toggle_while_awaiting_is_noop() {
        let gate = Arc::new(Notify::new());
        let (controller, view) = widget(vec![success("ok")], Some(gate.clone()));
        controller.open();
        controller.set_input("hi");
        let pending = match controller.submit() {
            SubmitOutcome::Sent(p) => p,
            other => panic!("expected Sent, got {other:?}"),
        };

        assert_eq!(controller.toggle(), PanelState::OpenAwaiting);
        assert!(!controller.close());
        assert!(!controller.open());
        assert_eq!(controller.state(), PanelState::OpenAwaiting);
        assert_eq!(view.count(&ViewEvent::BeginClose), 0);

        gate.notify_one();
        pending.finished().await.unwrap();
        assert_eq!(controller.state(), PanelState::OpenIdle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_is_revealed_exactly() {
        let reply = "Saturn’s rings are mostly ice 🪐✨ no cap";
        let (controller, view) = widget(vec![success(reply)], None);
        controller.open();

        let exchange = send(&controller, "tell me about saturn").await;
        assert_eq!(exchange.response_text.as_deref(), Some(reply));
        assert!(exchange.error_category.is_none());
        assert_eq!(controller.state(), PanelState::OpenIdle);

        tokio::time::sleep(Duration::from_secs(5)).await;

        let transcript = controller.transcript();
        let last = transcript.last().unwrap();
        assert_eq!(last.role, ChatRole::Bot);
        assert_eq!(last.text, reply);
        assert_eq!(view.text_of(MessageId(1)).as_deref(), Some(reply));
        assert_eq!(view.texts_for(MessageId(1)).len(), reply.chars().count());
        assert_eq!(controller.mood(), Mood::Happy);
        assert!(!controller.is_revealing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_message_renders_verbatim_and_input_clears() {
        let (controller, view) = widget(vec![success("ok")], None);
        controller.open();
        send(&controller, "  why is mars red?  ").await;

        assert_eq!(
            view.events()[2],
            ViewEvent::Append(MessageId(0), ChatRole::User, "why is mars red?".to_string())
        );
        assert_eq!(controller.input_value(), "");
        assert_eq!(view.count(&ViewEvent::ClearInput), 1);
        assert_eq!(view.count(&ViewEvent::Loading(true)), 1);
        assert_eq!(view.count(&ViewEvent::Loading(false)), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quota_failure_renders_gateway_response() {
        let (controller, view) = widget(
            vec![failure(
                503,
                "OpenAI quota exceeded. Please try again later.",
                Some("Out of power like a forgotten Mars rover 😩 Come back later"),
            )],
            None,
        );
        controller.open();

        let exchange = send(&controller, "hi").await;
        assert_eq!(exchange.error_category, Some(ErrorCategory::ServiceUnavailable));
        assert_eq!(controller.state(), PanelState::OpenIdle);
        assert_eq!(controller.mood(), Mood::Sad);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(
            view.text_of(MessageId(1)).as_deref(),
            Some("Out of power like a forgotten Mars rover 😩 Come back later")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_without_response_falls_back_to_error() {
        let (controller, view) = widget(vec![failure(400, "Hey! type something", None)], None);
        controller.open();

        let exchange = send(&controller, "hi").await;
        assert_eq!(exchange.error_category, Some(ErrorCategory::InvalidInput));

        controller.skip_reveal();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(view.text_of(MessageId(1)).as_deref(), Some("Hey! type something"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_network_failure_returns_to_idle() {
        let (controller, view) = widget(
            vec![Err(TransportError::Network("connection refused".to_string()))],
            None,
        );
        controller.open();

        let exchange = send(&controller, "hi").await;
        assert!(exchange.response_text.is_none());
        assert_eq!(controller.state(), PanelState::OpenIdle);
        assert_eq!(view.last_mood(), Some(Mood::Sad));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(controller.transcript()[1].text, NETWORK_FAILURE);
        assert_eq!(view.text_of(MessageId(1)).as_deref(), Some(NETWORK_FAILURE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_filler_phrase_is_substituted_in_payload_only() {
        let (controller, _view) = widget(vec![success("fact incoming")], None);
        controller.open();

        let exchange = send(&controller, "Fact").await;
        assert!(exchange.was_substituted());
        assert_eq!(controller.transport().sent(), vec![ELABORATED_PROMPT.to_string()]);
        assert_eq!(controller.transcript()[0], ChatMessage::user("Fact"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_does_not_block_next_submit() {
        let long_reply = "z".repeat(200);
        let (controller, _view) = widget(vec![success(&long_reply), success("second")], None);
        controller.open();

        send(&controller, "first").await;
        assert!(controller.is_revealing());

        controller.set_input("again");
        assert!(matches!(controller.submit(), SubmitOutcome::Sent(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_greeting_appears_in_empty_transcript() {
        let (controller, view) = widget(vec![], None);
        controller.start();
        assert_eq!(view.last_mood(), Some(Mood::Happy));

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(controller.transcript().is_empty());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(controller.transcript(), vec![ChatMessage::bot(GREETING)]);
        assert_eq!(view.text_of(MessageId(0)).as_deref(), Some(GREETING));
    }

    #[tokio::test(start_paused = true)]
    async fn test_greeting_skipped_when_user_spoke_first() {
        let (controller, _view) = widget(vec![success("hey")], None);
        controller.start();
        controller.open();
        send(&controller, "hello").await;

        tokio::time::sleep(Duration::from_secs(1)).await;
        let transcript = controller.transcript();
        assert_eq!(transcript.len(), 2);
        assert!(transcript.iter().all(|m| m.text != GREETING));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_timers() {
        let (controller, view) = widget(vec![success("abcdefghij")], None);
        controller.start();
        controller.open();
        send(&controller, "hi").await;

        tokio::time::sleep(Duration::from_millis(65)).await;
        controller.shutdown();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(view.text_of(MessageId(1)).as_deref(), Some("ab"));
        assert_eq!(controller.transcript().len(), 2);
        assert!(!controller.is_revealing());
    }
}
