use std::sync::Arc;

use tokio::sync::watch;

/// A value with one writer (the owning service) and any number of readers.
///
/// Readers get a copy with [`Observable::snapshot`] or a
/// [`watch::Receiver`] that wakes on every change. Cloning shares the
/// same value so listener tasks can write on the service's behalf.
pub struct Observable<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Clone> Observable<T> {
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(value);
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> T {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Read without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    pub(crate) fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate in place. `f` returns whether it changed anything; readers
    /// are only woken when it did.
    pub(crate) fn modify(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_see_updates() {
        let value = Observable::new(1);
        let mut rx = value.subscribe();

        value.set(2);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 2);
        assert_eq!(value.snapshot(), 2);
    }

    #[test]
    fn unchanged_modify_does_not_notify() {
        let value = Observable::new(vec![1, 2]);
        let rx = value.subscribe();

        assert!(!value.modify(|v| {
            let before = v.len();
            v.retain(|x| *x != 9);
            v.len() != before
        }));
        assert!(!rx.has_changed().unwrap());

        assert!(value.modify(|v| {
            v.push(3);
            true
        }));
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn clones_share_the_value() {
        let value = Observable::new(String::from("a"));
        let writer = value.clone();
        writer.set("b".into());
        assert_eq!(value.with(|s| s.len()), 1);
        assert_eq!(value.snapshot(), "b");
    }
}
