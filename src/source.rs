use async_trait::async_trait;

use crate::error::Result;
use crate::types::{NotificationKey, NotificationRanking, StatusNotification};

/// Seam to the host platform's notification service.
///
/// The launcher process does not own the notification pipeline; it queries
/// it through this trait. Production code backs it with the platform
/// binding, tests with an in-memory fake.
#[async_trait]
pub trait NotificationSource: Send + Sync {
    /// All notifications currently active on the platform.
    ///
    /// Fails with [`Error::PermissionDenied`](crate::Error::PermissionDenied)
    /// on vendor platforms that revoke listener access at query time.
    async fn active_notifications(&self) -> Result<Vec<StatusNotification>>;

    /// Active notifications matching the given keys. Keys with no active
    /// notification are simply absent from the result.
    async fn notifications_for_keys(
        &self,
        keys: &[NotificationKey],
    ) -> Result<Vec<StatusNotification>>;

    /// Ranking metadata for one notification key, or `None` when the
    /// platform has no ranking for it.
    async fn ranking(&self, key: &NotificationKey) -> Option<NotificationRanking>;
}
