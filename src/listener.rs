use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::PlatformCapabilities;
use crate::registry::ListenerRegistry;
use crate::relay;
use crate::source::NotificationSource;
use crate::types::{ListenerEvent, NotificationKey, StatusNotification};

/// Adapter over the platform notification service.
///
/// The host wires the platform's posted/removed/connected/disconnected
/// callbacks to the matching methods here; each one enqueues a raw event
/// on the background relay and returns immediately, so the platform's
/// callback context is never blocked. Handles are cheap to clone and all
/// feed the same relay.
#[derive(Clone)]
pub struct NotificationListener {
    source: Arc<dyn NotificationSource>,
    worker_tx: mpsc::UnboundedSender<ListenerEvent>,
    connected: Arc<AtomicBool>,
}

impl NotificationListener {
    /// Start the adapter: spawn the background worker and foreground
    /// dispatch loops and attach the new handle to the registry.
    pub async fn start(
        source: Arc<dyn NotificationSource>,
        capabilities: PlatformCapabilities,
        registry: &ListenerRegistry,
    ) -> Self {
        let (worker_tx, worker_rx) = mpsc::unbounded_channel();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();

        let connected = registry.connected_flag();
        relay::spawn_worker_loop(
            source.clone(),
            capabilities,
            connected.clone(),
            worker_rx,
            ui_tx,
        );
        relay::spawn_dispatch_loop(registry.observer_slot(), ui_rx);

        let listener = Self {
            source,
            worker_tx,
            connected,
        };
        registry.attach(listener.clone()).await;
        info!("Notification listener started");
        listener
    }

    /// Platform callback: a notification was posted or updated.
    pub fn notification_posted(&self, notification: StatusNotification) {
        self.send(ListenerEvent::Posted(notification));
    }

    /// Platform callback: a notification was removed.
    pub fn notification_removed(&self, notification: StatusNotification) {
        self.send(ListenerEvent::Removed(notification));
    }

    /// Platform callback: the listener connection was established. Marks
    /// the adapter connected and schedules a full refresh.
    pub fn listener_connected(&self) {
        self.connected.store(true, Ordering::SeqCst);
        info!("Notification listener connected");
        self.send(ListenerEvent::FullRefresh);
    }

    /// Platform callback: the listener connection was lost.
    pub fn listener_disconnected(&self) {
        self.connected.store(false, Ordering::SeqCst);
        info!("Notification listener disconnected");
    }

    /// Whether the platform currently reports the listener as connected.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Re-read and republish the full active list.
    pub(crate) fn schedule_full_refresh(&self) {
        self.send(ListenerEvent::FullRefresh);
    }

    /// Resolve the given keys against the live platform list. Order of the
    /// result follows whatever the platform returns; keys without an
    /// active notification are absent. A denied query yields an empty vec.
    ///
    /// This makes a potentially expensive out-of-process query and must be
    /// kept off the delivery path.
    pub async fn notifications_for_keys(
        &self,
        keys: &[NotificationKey],
    ) -> Vec<StatusNotification> {
        match self.source.notifications_for_keys(keys).await {
            Ok(notifications) => notifications,
            Err(e) => {
                warn!("Key lookup failed, returning no notifications: {}", e);
                Vec::new()
            }
        }
    }

    fn send(&self, event: ListenerEvent) {
        // Unbounded send only fails once the worker loop is gone, i.e.
        // during teardown.
        if self.worker_tx.send(event).is_err() {
            warn!("Background relay is gone, dropping listener event");
        }
    }
}
