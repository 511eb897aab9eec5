//! Keystroke debouncing for the search box.
//!
//! The filter engine is cheap enough to run on every keystroke; the
//! debouncer exists for front-ends that would rather wait until typing
//! pauses. It only decides *when* a term is applied, never *how*.

use std::time::Duration;
use tokio::sync::watch;
use tokio::time::timeout;

/// Writer half: pushes raw search text as it is typed.
#[derive(Debug)]
pub struct SearchInput {
    tx: watch::Sender<String>,
}

impl SearchInput {
    pub fn push(&self, raw: impl Into<String>) {
        self.tx.send_replace(raw.into());
    }
}

/// Reader half: yields the latest term once input has been quiet for `delay`.
#[derive(Debug)]
pub struct SearchDebouncer {
    rx: watch::Receiver<String>,
    delay: Duration,
    closed: bool,
}

/// Creates a connected input / debouncer pair.
pub fn debounce_channel(delay: Duration) -> (SearchInput, SearchDebouncer) {
    let (tx, rx) = watch::channel(String::new());
    (
        SearchInput { tx },
        SearchDebouncer {
            rx,
            delay,
            closed: false,
        },
    )
}

impl SearchDebouncer {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits for the next settled search term.
    ///
    /// Intermediate terms pushed within `delay` of each other are skipped.
    /// Returns `None` once every [`SearchInput`] is dropped and the last
    /// pending term has been delivered.
    pub async fn next_settled(&mut self) -> Option<String> {
        if self.closed || self.rx.changed().await.is_err() {
            self.closed = true;
            return None;
        }

        loop {
            match timeout(self.delay, self.rx.changed()).await {
                // quiet period elapsed
                Err(_) => break,
                Ok(Ok(())) => continue,
                Ok(Err(_)) => {
                    self.closed = true;
                    break;
                }
            }
        }

        Some(self.rx.borrow_and_update().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, sleep};

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_term() {
        let (input, mut debouncer) = debounce_channel(Duration::from_millis(300));

        let typing = tokio::spawn(async move {
            for term in ["r", "re", "rea", "react"] {
                input.push(term);
                sleep(Duration::from_millis(50)).await;
            }
            input
        });

        assert_eq!(debouncer.next_settled().await.as_deref(), Some("react"));
        drop(typing.await.unwrap());
        assert_eq!(debouncer.next_settled().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_pauses_yield_each_term() {
        let (input, mut debouncer) = debounce_channel(Duration::from_millis(100));

        input.push("vue");
        assert_eq!(debouncer.next_settled().await.as_deref(), Some("vue"));

        advance(Duration::from_millis(500)).await;
        input.push("node");
        assert_eq!(debouncer.next_settled().await.as_deref(), Some("node"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_term_delivered_after_input_dropped() {
        let (input, mut debouncer) = debounce_channel(Duration::from_millis(100));

        input.push("css");
        drop(input);

        assert_eq!(debouncer.next_settled().await.as_deref(), Some("css"));
        assert_eq!(debouncer.next_settled().await, None);
    }

    #[tokio::test]
    async fn test_zero_delay_passes_terms_through() {
        let (input, mut debouncer) = debounce_channel(Duration::ZERO);

        input.push("api");

        assert_eq!(debouncer.next_settled().await.as_deref(), Some("api"));
        assert_eq!(debouncer.delay(), Duration::ZERO);
    }
}
