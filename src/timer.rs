//! Cancellable background tasks.
//!
//! A [`TaskGuard`] aborts its task on drop. Replacing or dropping the guard
//! is how a countdown or a pending generation gets cancelled. Events already
//! queued by the old task still carry its [`Token`], which no longer matches.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::event::{AppEvent, EventSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(u64);

/// Issues strictly increasing tokens.
#[derive(Debug, Default)]
pub struct TokenSource {
    next: u64,
}

impl TokenSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Token {
        self.next += 1;
        Token(self.next)
    }
}

#[derive(Debug)]
pub struct TaskGuard {
    token: Token,
    handle: JoinHandle<()>,
}

impl TaskGuard {
    pub fn spawn<F>(token: Token, task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            token,
            handle: tokio::spawn(task),
        }
    }

    pub fn owns(&self, token: Token) -> bool {
        self.token == token
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Sends `AppEvent::Tick(token)` every `period` until the guard is dropped
/// or the receiver goes away. The first tick arrives one period after start.
pub fn spawn_countdown(token: Token, period: Duration, tx: EventSender) -> TaskGuard {
    TaskGuard::spawn(token, async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if tx.send(AppEvent::Tick(token)).is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_tokens_are_unique() {
        let mut tokens = TokenSource::new();
        let first = tokens.issue();
        let second = tokens.issue();
        assert_ne!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_ticks_each_period() {
        let (tx, mut rx) = event::channel();
        let token = TokenSource::new().issue();
        let _guard = spawn_countdown(token, SECOND, tx);

        for _ in 0..3 {
            match rx.recv().await {
                Some(AppEvent::Tick(received)) => assert_eq!(received, token),
                other => panic!("expected tick, got {:?}", other),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_guard_stops_ticks() {
        let (tx, mut rx) = event::channel();
        let token = TokenSource::new().issue();
        let guard = spawn_countdown(token, SECOND, tx);

        assert!(matches!(rx.recv().await, Some(AppEvent::Tick(_))));
        drop(guard);

        // the aborted task drops the last sender
        time::sleep(SECOND * 5).await;
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_guard_aborts_pending_task() {
        let (tx, mut rx) = event::channel();
        let mut tokens = TokenSource::new();
        let token = tokens.issue();
        let guard = TaskGuard::spawn(token, async move {
            time::sleep(SECOND * 2).await;
            let _ = tx.send(AppEvent::Tick(token));
        });
        assert!(guard.owns(token));
        assert!(!guard.owns(tokens.issue()));

        drop(guard);
        time::sleep(SECOND * 3).await;
        assert!(rx.recv().await.is_none());
    }
}
