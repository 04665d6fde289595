//! Trailing-edge debouncing for search input.
//!
//! A `Debouncer` holds at most one pending timer. Scheduling a new call aborts
//! the pending one, so only the last call of a burst ever runs.

use crate::session::ViewSession;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

/// Delay between the last keystroke and the search being committed.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Run `action` after the delay unless another call supersedes it first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = self.delay;
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
            debug!("Superseded pending debounced call");
        }
        *pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            action();
        }));
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Raw search box text plus the debounced commit into a shared session.
#[derive(Debug)]
pub struct SearchInput {
    text: String,
    debouncer: Debouncer,
    session: Arc<Mutex<ViewSession>>,
}

impl SearchInput {
    pub fn new(session: Arc<Mutex<ViewSession>>, delay: Duration) -> Self {
        Self {
            text: String::new(),
            debouncer: Debouncer::new(delay),
            session,
        }
    }

    /// What the user currently sees in the box, committed or not.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record a keystroke; the session only sees the query once typing pauses.
    pub fn on_input(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let query = self.text.clone();
        let session = Arc::clone(&self.session);
        self.debouncer.call(move || {
            session
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .commit_search(query);
        });
    }

    /// Clear the box and the committed query immediately.
    pub fn clear(&mut self) {
        self.debouncer.cancel();
        self.text.clear();
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .commit_search(String::new());
    }
}
