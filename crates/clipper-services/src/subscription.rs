//! Scoped background tasks: push-event listeners and timers.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use clipper_common::BackendEvent;

/// Owns the tasks a service spawned. Dropping it, or calling
/// [`Subscriptions::teardown`], aborts every task.
#[derive(Default)]
pub struct Subscriptions {
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every event from `rx` to `on_event`, in delivery order, until
    /// the stream closes or the subscription is torn down.
    pub fn listen<F>(
        &self,
        name: &'static str,
        mut rx: broadcast::Receiver<BackendEvent>,
        mut on_event: F,
    ) where
        F: FnMut(BackendEvent) + Send + 'static,
    {
        self.spawn(name, async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        debug!(listener = name, event = event.name(), "applying event");
                        on_event(event);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(listener = name, skipped, "event listener lagged");
                    }
                    Err(RecvError::Closed) => {
                        debug!(listener = name, "event stream closed");
                        break;
                    }
                }
            }
        });
    }

    pub fn spawn<F>(&self, name: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        debug!(task = name, "spawning scoped task");
        self.tasks().push(tokio::spawn(task));
    }

    /// Tasks still running.
    pub fn active(&self) -> usize {
        self.tasks().iter().filter(|t| !t.is_finished()).count()
    }

    pub fn teardown(&self) {
        let tasks: Vec<_> = self.tasks().drain(..).collect();
        if !tasks.is_empty() {
            debug!(count = tasks.len(), "tearing down subscriptions");
        }
        for task in tasks {
            task.abort();
        }
    }

    fn tasks(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use clipper_common::EventBus;

    use super::*;

    #[tokio::test]
    async fn listener_applies_events_in_order() {
        let bus = EventBus::new(16);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let subs = Subscriptions::new();

        let sink = Arc::clone(&seen);
        subs.listen("test", bus.subscribe(), move |event| {
            if let BackendEvent::StatusChanged(running) = event {
                sink.lock().unwrap().push(running);
            }
        });

        bus.publish(BackendEvent::StatusChanged(false));
        bus.publish(BackendEvent::StatusChanged(true));
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;

        assert_eq!(*seen.lock().unwrap(), vec![false, true]);
    }

    #[tokio::test]
    async fn teardown_aborts_and_releases_receivers() {
        let bus = EventBus::new(16);
        let subs = Subscriptions::new();
        subs.listen("a", bus.subscribe(), |_| {});
        subs.listen("b", bus.subscribe(), |_| {});
        assert_eq!(subs.active(), 2);

        subs.teardown();
        assert_eq!(subs.active(), 0);

        // Aborted tasks drop their receivers once the runtime reaps them.
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        assert_eq!(bus.receiver_count(), 0);
    }

    #[tokio::test]
    async fn drop_aborts_tasks() {
        let counter = Arc::new(AtomicUsize::new(0));
        let bus = EventBus::new(16);
        {
            let subs = Subscriptions::new();
            let counter = Arc::clone(&counter);
            subs.listen("dropped", bus.subscribe(), move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        tokio::task::yield_now().await;

        bus.publish(BackendEvent::StatusChanged(true));
        tokio::task::yield_now().await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn closed_stream_ends_listener() {
        let bus = EventBus::new(16);
        let subs = Subscriptions::new();
        subs.listen("closing", bus.subscribe(), |_| {});
        drop(bus);

        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        assert_eq!(subs.active(), 0);
    }
}
