//! Cancellable timers and the search debouncer
//!
//! Screens never sleep inline: delayed navigation is a [`CancellableTimer`]
//! owned by the screen, so dropping the screen cancels it, and tests can
//! drive it with a paused tokio clock.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::trace;

/// Delay before leaving the splash screen
pub const SPLASH_DELAY: Duration = Duration::from_millis(1000);

/// Delay before the grade submission confirmation returns home
pub const GRADE_CONFIRM_DELAY: Duration = Duration::from_millis(2000);

/// Quiet period before a search query edit is applied
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Resolves to a value after a delay unless cancelled first.
/// Dropping the timer cancels it.
#[derive(Debug)]
pub struct CancellableTimer<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> CancellableTimer<T> {
    pub fn schedule(delay: Duration, value: T) -> Self {
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            value
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the timer. `None` when it was cancelled or already consumed.
    pub async fn fired(&mut self) -> Option<T> {
        let handle = self.handle.as_mut()?;
        let result = handle.await;
        self.handle = None;
        result.ok()
    }
}

impl<T> CancellableTimer<T> {
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            trace!("Cancelling pending timer");
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for CancellableTimer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Trailing-edge debouncer: a value is emitted once no newer value arrived
/// for the configured delay. Dropping the debouncer discards a pending value.
#[derive(Debug)]
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver of its settled values
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (input, mut rx) = mpsc::unbounded_channel::<T>();
        let (output, settled) = mpsc::unbounded_channel::<T>();

        let task = tokio::spawn(async move {
            let mut pending: Option<T> = None;
            loop {
                match pending.take() {
                    None => match rx.recv().await {
                        Some(value) => pending = Some(value),
                        None => break,
                    },
                    Some(value) => {
                        tokio::select! {
                            next = rx.recv() => match next {
                                Some(newer) => pending = Some(newer),
                                None => break,
                            },
                            _ = sleep(delay) => {
                                if output.send(value).is_err() {
                                    break;
                                }
                            }
                        }
                    }
                }
            }
        });

        (Self { input, task }, settled)
    }

    pub fn push(&self, value: T) {
        // The task only stops once the debouncer is dropped
        let _ = self.input.send(value);
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
