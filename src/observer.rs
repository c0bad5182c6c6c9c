use std::sync::Arc;

use tokio::sync::RwLock;

use crate::types::{NotificationKey, NotificationPosted, OwnerKey, StatusNotification};

/// In-process consumer of relayed notification updates.
///
/// Callbacks are invoked from the foreground dispatch loop, one at a time
/// and in arrival order. Implementations should hand the data off quickly
/// rather than doing heavy work inline.
pub trait NotificationObserver: Send + Sync {
    /// A notification was posted or updated.
    fn on_notification_posted(&self, posted: NotificationPosted);

    /// A notification was removed.
    fn on_notification_removed(&self, owner: OwnerKey, key: NotificationKey);

    /// The complete, already-filtered active list. Sent after the listener
    /// connects and after an observer registers, so a fresh observer never
    /// starts from stale state.
    fn on_notification_full_refresh(&self, active: Vec<StatusNotification>);
}

/// Shared slot holding the currently registered observer, if any.
pub(crate) type ObserverSlot = Arc<RwLock<Option<Arc<dyn NotificationObserver>>>>;
