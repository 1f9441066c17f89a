//! Recurring status polling
//!
//! A subscription is a background tokio task that calls
//! [`WattBoxClient::get_status`] once per interval and hands each outcome to
//! the registered listeners. The first poll happens one full interval after
//! subscribing. Polls are independent: a slow response does not delay the
//! next tick, and failures never stop the subscription.

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};

use crate::client::{Inner, WattBoxClient};
use crate::error::{ApiError, Result};

impl WattBoxClient {
    /// Start polling the device status every `interval`.
    ///
    /// Outcomes are delivered to listeners registered with
    /// [`on_status`](Self::on_status) and [`on_error`](Self::on_error).
    /// Calling this while already subscribed cancels the previous
    /// subscription first, so at most one poller runs per client.
    ///
    /// Must be called from within a tokio runtime.
    pub fn subscribe_status(&self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(ApiError::InvalidParameter(
                "status polling interval must be greater than zero".to_string(),
            ));
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|_| ApiError::NoRuntime)?;
        let task = runtime.spawn(poll_status(Arc::downgrade(&self.inner), interval));

        let previous = self.inner.poller.lock().replace(task);
        if let Some(previous) = previous {
            tracing::debug!("replacing active status subscription");
            previous.abort();
        }

        tracing::debug!(interval_ms = interval.as_millis() as u64, "status polling started");
        Ok(())
    }

    /// Stop polling. Does nothing when no subscription is active.
    pub fn unsubscribe_status(&self) {
        if let Some(handle) = self.inner.poller.lock().take() {
            handle.abort();
            tracing::debug!("status polling stopped");
        }
    }

    /// Whether a status subscription is active
    pub fn is_subscribed(&self) -> bool {
        self.inner
            .poller
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

/// Polling loop; ends on its own once every client handle is dropped.
async fn poll_status(client: Weak<Inner>, period: Duration) {
    let mut ticks = time::interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticks.tick().await;

        let Some(inner) = client.upgrade() else {
            tracing::debug!("client dropped, ending status polling");
            break;
        };
        let client = WattBoxClient { inner };

        tokio::spawn(async move {
            match client.get_status().await {
                Ok(status) => client.inner.listeners.emit_status(&status),
                Err(e) => {
                    tracing::warn!(error = %e, "status poll failed");
                    client.inner.listeners.emit_error(&e);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_outside_runtime_fails() {
        let client = WattBoxClient::new("tech", "pw1", "10.0.0.5/").unwrap();
        let result = client.subscribe_status(Duration::from_secs(1));
        assert!(matches!(result, Err(ApiError::NoRuntime)));
        assert!(!client.is_subscribed());
    }

    #[tokio::test]
    async fn test_zero_interval_is_rejected() {
        let client = WattBoxClient::new("tech", "pw1", "10.0.0.5/").unwrap();
        let result = client.subscribe_status(Duration::ZERO);
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn test_subscribe_and_unsubscribe_lifecycle() {
        let client = WattBoxClient::new("tech", "pw1", "10.0.0.5/").unwrap();

        client.subscribe_status(Duration::from_secs(60)).unwrap();
        assert!(client.is_subscribed());

        // Replacing keeps exactly one active subscription
        client.subscribe_status(Duration::from_secs(30)).unwrap();
        assert!(client.is_subscribed());

        client.unsubscribe_status();
        assert!(!client.is_subscribed());

        // Idle unsubscribe is a no-op
        client.unsubscribe_status();
        assert!(!client.is_subscribed());
    }

    #[tokio::test]
    async fn test_poller_ends_when_client_dropped() {
        let client = WattBoxClient::new("tech", "pw1", "10.0.0.5/").unwrap();
        client.subscribe_status(Duration::from_millis(10)).unwrap();
        let weak = Arc::downgrade(&client.inner);

        drop(client);
        assert!(weak.upgrade().is_none());
    }
}
