use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::listener::NotificationListener;
use crate::observer::{NotificationObserver, ObserverSlot};

/// Process-wide registry tying the listener adapter to its observer.
///
/// Replaces implicit global state with an explicit object: it owns the
/// connection flag, the observer slot and the handle of the currently
/// attached adapter. Clones share the same underlying state, so the host
/// can pass the registry to whichever component needs to ask "is the
/// listener connected".
#[derive(Clone)]
pub struct ListenerRegistry {
    inner: Arc<RegistryInner>,
}

struct RegistryInner {
    connected: Arc<AtomicBool>,
    observer: ObserverSlot,
    attached: RwLock<Option<NotificationListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                connected: Arc::new(AtomicBool::new(false)),
                observer: Arc::new(RwLock::new(None)),
                attached: RwLock::new(None),
            }),
        }
    }

    /// Register the observer, replacing any previous one, and schedule a
    /// full refresh so the new observer starts from a consistent view.
    /// Without an attached adapter nothing is scheduled; the adapter's own
    /// connect refresh covers the observer once it starts.
    pub async fn set_observer(&self, observer: Arc<dyn NotificationObserver>) {
        *self.inner.observer.write().await = Some(observer);

        if let Some(listener) = &*self.inner.attached.read().await {
            listener.schedule_full_refresh();
        }
        info!("Notification observer registered");
    }

    /// Drop the current observer. Messages relayed from now on are
    /// discarded until a new observer registers.
    pub async fn clear_observer(&self) {
        *self.inner.observer.write().await = None;
        info!("Notification observer cleared");
    }

    /// The live adapter handle, only while the adapter is connected to the
    /// platform. Callers therefore never query a disconnected adapter.
    pub async fn instance_if_connected(&self) -> Option<NotificationListener> {
        if !self.inner.connected.load(Ordering::SeqCst) {
            return None;
        }
        self.inner.attached.read().await.clone()
    }

    /// Attach a freshly started adapter. The connection flag starts false
    /// until the platform reports the listener as connected.
    pub(crate) async fn attach(&self, listener: NotificationListener) {
        self.inner.connected.store(false, Ordering::SeqCst);
        *self.inner.attached.write().await = Some(listener);
        debug!("Notification listener attached to registry");
    }

    /// Detach the adapter on stop: the instance accessor returns nothing
    /// from here on.
    pub async fn detach(&self) {
        self.inner.connected.store(false, Ordering::SeqCst);
        *self.inner.attached.write().await = None;
        debug!("Notification listener detached from registry");
    }

    pub(crate) fn connected_flag(&self) -> Arc<AtomicBool> {
        self.inner.connected.clone()
    }

    pub(crate) fn observer_slot(&self) -> ObserverSlot {
        self.inner.observer.clone()
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
