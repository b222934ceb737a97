//! Cancellable scheduled tasks.
//!
//! A [`TimerHandle`] pairs a spawned tokio task with the
//! `CancellationToken` it watches. Cancelling is idempotent and never
//! blocks; a cancelled task stops at its next await point.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct TimerHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Spawn `body` with a fresh token. `body` must return promptly once the
    /// token is cancelled.
    pub fn spawn<F, Fut>(body: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let task = tokio::spawn(body(token.clone()));
        Self { token, task }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the task to end, whether it ran to completion or was cancelled.
    pub async fn wait(self) {
        let _ = self.task.await;
    }
}

/// Run `fire` once after `delay`, unless cancelled first.
pub fn schedule_once<F>(delay: Duration, fire: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    TimerHandle::spawn(move |token| async move {
        tokio::select! {
            biased;
            _ = token.cancelled() => {}
            _ = tokio::time::sleep(delay) => fire(),
        }
    })
}

/// A group of timers cancelled together on teardown.
#[derive(Debug, Default)]
pub struct TimerSet {
    handles: Vec<TimerHandle>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, handle: TimerHandle) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    pub fn active(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
    }
}
