//! Drives a [`Typewriter`] on tokio time.
//!
//! Each tick sleeps `speed` after the previous one, so scheduling overhead
//! accumulates as drift instead of ticks bunching up. Emission and
//! cancellation take the same lock: once [`RevealHandle::cancel`] returns
//! (or the handle is dropped), no tick is delivered and the completion hook
//! never runs, even if its timer had already fired.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::typewriter::Typewriter;

/// Observable progress of a running reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    /// One more character became visible
    Tick { visible: usize, prefix: String },

    /// The whole text is visible; sent exactly once
    Complete,
}

type CompletionHook = Box<dyn FnOnce() + Send + 'static>;

struct Shared {
    cancelled: bool,
    on_complete: Option<CompletionHook>,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a running reveal. Dropping it cancels the reveal.
pub struct RevealHandle {
    events: mpsc::UnboundedReceiver<RevealEvent>,
    shared: Arc<Mutex<Shared>>,
    task: JoinHandle<()>,
}

impl RevealHandle {
    /// Next event, or `None` once the reveal has completed
    pub async fn next(&mut self) -> Option<RevealEvent> {
        self.events.recv().await
    }

    /// Drain the reveal to completion and return every event
    pub async fn collect(mut self) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.next().await {
            events.push(event);
        }
        events
    }

    /// Stop the reveal. Nothing is delivered after this returns.
    pub fn cancel(self) {
        drop(self);
    }

    /// Whether the driving task has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        {
            let mut shared = lock(&self.shared);
            shared.cancelled = true;
            shared.on_complete = None;
        }
        self.task.abort();
    }
}

impl Typewriter {
    /// Start revealing on the current tokio runtime
    pub fn start(self) -> RevealHandle {
        spawn(self, None)
    }

    /// Start revealing and run `hook` once the whole text is visible.
    ///
    /// The hook runs on the reveal task and must not block.
    pub fn start_with_completion<F>(self, hook: F) -> RevealHandle
    where
        F: FnOnce() + Send + 'static,
    {
        spawn(self, Some(Box::new(hook)))
    }
}

fn spawn(typewriter: Typewriter, on_complete: Option<CompletionHook>) -> RevealHandle {
    let (tx, events) = mpsc::unbounded_channel();
    let shared = Arc::new(Mutex::new(Shared {
        cancelled: false,
        on_complete,
    }));

    let task = tokio::spawn(run_reveal(typewriter, tx, Arc::clone(&shared)));

    RevealHandle {
        events,
        shared,
        task,
    }
}

async fn run_reveal(
    typewriter: Typewriter,
    tx: mpsc::UnboundedSender<RevealEvent>,
    shared: Arc<Mutex<Shared>>,
) {
    tokio::time::sleep(typewriter.delay()).await;

    for visible in 1..=typewriter.len() {
        tokio::time::sleep(typewriter.speed()).await;

        let event = RevealEvent::Tick {
            visible,
            prefix: typewriter.prefix(visible).to_string(),
        };
        if !emit(&shared, &tx, event) {
            tracing::trace!("Reveal cancelled at {} chars", visible);
            return;
        }
    }

    let mut guard = lock(&shared);
    if guard.cancelled {
        return;
    }
    let _ = tx.send(RevealEvent::Complete);
    if let Some(hook) = guard.on_complete.take() {
        hook();
    }
}

/// Send an event unless the reveal was cancelled
fn emit(shared: &Mutex<Shared>, tx: &mpsc::UnboundedSender<RevealEvent>, event: RevealEvent) -> bool {
    let guard = lock(shared);
    !guard.cancelled && tx.send(event).is_ok()
}
