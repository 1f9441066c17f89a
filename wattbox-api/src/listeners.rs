//! Listener registration for status polling events.
//!
//! Only two kinds of event exist: a status update and a polling error.
//! Listeners are plain closures called on the tokio worker that completed
//! the poll, so they should return quickly.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use wattbox_parser::BasicStatus;

use crate::error::ApiError;
use crate::response::Response;

/// Handle returned when registering a listener; used to remove it again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type StatusListener = Arc<dyn Fn(&Response<BasicStatus>) + Send + Sync>;
type ErrorListener = Arc<dyn Fn(&ApiError) + Send + Sync>;

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: AtomicU64,
    status: RwLock<Vec<(ListenerId, StatusListener)>>,
    error: RwLock<Vec<(ListenerId, ErrorListener)>>,
}

impl Listeners {
    fn next_id(&self) -> ListenerId {
        ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    pub(crate) fn add_status(&self, listener: StatusListener) -> ListenerId {
        let id = self.next_id();
        self.status.write().push((id, listener));
        id
    }

    pub(crate) fn add_error(&self, listener: ErrorListener) -> ListenerId {
        let id = self.next_id();
        self.error.write().push((id, listener));
        id
    }

    /// Remove a listener of either kind. Returns whether it was registered.
    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut removed = false;

        let mut status = self.status.write();
        let before = status.len();
        status.retain(|(listener_id, _)| *listener_id != id);
        removed |= status.len() != before;
        drop(status);

        let mut error = self.error.write();
        let before = error.len();
        error.retain(|(listener_id, _)| *listener_id != id);
        removed |= error.len() != before;

        removed
    }

    pub(crate) fn emit_status(&self, status: &Response<BasicStatus>) {
        // Snapshot so listeners may register or remove listeners themselves
        let listeners: Vec<StatusListener> =
            self.status.read().iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            listener(status);
        }
    }

    pub(crate) fn emit_error(&self, error: &ApiError) {
        let listeners: Vec<ErrorListener> =
            self.error.read().iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            listener(error);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.status.read().len() + self.error.read().len()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("status", &self.status.read().len())
            .field("error", &self.error.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_emit_reaches_all_status_listeners() {
        let listeners = Listeners::default();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = Arc::clone(&calls);
            listeners.add_status(Arc::new(move |_: &Response<BasicStatus>| {
                calls.fetch_add(1, Ordering::SeqCst);
            }));
        }

        listeners.emit_status(&Response::Record(BasicStatus::default()));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_error_listeners_only_see_errors() {
        let listeners = Listeners::default();
        let status_calls = Arc::new(AtomicUsize::new(0));
        let error_calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&status_calls);
        listeners.add_status(Arc::new(move |_: &Response<BasicStatus>| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let counter = Arc::clone(&error_calls);
        listeners.add_error(Arc::new(move |_: &ApiError| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        listeners.emit_error(&ApiError::ConnectionRefused);

        assert_eq!(status_calls.load(Ordering::SeqCst), 0);
        assert_eq!(error_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_listener() {
        let listeners = Listeners::default();
        let id = listeners.add_error(Arc::new(|_: &ApiError| {}));
        let other = listeners.add_status(Arc::new(|_: &Response<BasicStatus>| {}));

        assert_ne!(id, other);
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert_eq!(listeners.len(), 1);
    }
}
