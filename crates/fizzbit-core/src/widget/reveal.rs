//! Character-by-character reveal of an already received bot reply.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;

use fizzbit_types::config::MIN_REVEAL_INTERVAL;

use super::state::MessageId;
use super::timer::TimerHandle;
use super::view::ChatView;

/// A running reveal animation.
///
/// `cancel` stops it where it is (teardown); `skip` jumps to the full text.
#[derive(Debug)]
pub struct RevealHandle {
    timer: TimerHandle,
    skip: CancellationToken,
}

impl RevealHandle {
    pub fn cancel(&self) {
        self.timer.cancel();
    }

    pub fn skip(&self) {
        self.skip.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    pub async fn wait(self) {
        self.timer.wait().await;
    }
}

/// Reveal `text` into message `id`, one `char` every `period`, scrolling to
/// the bottom after each step. `period` is raised to at least
/// [`MIN_REVEAL_INTERVAL`].
pub fn start_reveal(
    view: Arc<dyn ChatView>,
    id: MessageId,
    text: String,
    period: Duration,
) -> RevealHandle {
    let skip = CancellationToken::new();
    let skip_signal = skip.clone();
    let period = period.max(MIN_REVEAL_INTERVAL);

    let timer = TimerHandle::spawn(move |cancel| async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        let ends = text.char_indices().map(|(at, ch)| at + ch.len_utf8());

        for end in ends {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return,
                _ = skip_signal.cancelled() => {
                    view.set_message_text(id, &text);
                    view.scroll_to_bottom();
                    break;
                }
                _ = ticker.tick() => {
                    view.set_message_text(id, &text[..end]);
                    view.scroll_to_bottom();
                }
            }
        }
        view.message_revealed(id);
    });

    RevealHandle { timer, skip }
}
