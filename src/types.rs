use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel id the platform assigns to notifications that predate the
/// channel system (the legacy "Miscellaneous" channel).
pub const DEFAULT_CHANNEL_ID: &str = "miscellaneous";

/// Snapshot of a single notification as reported by the host platform.
///
/// Built once per callback from the platform payload and treated as
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusNotification {
    /// Platform-unique key identifying this notification instance
    pub key: String,
    /// Package name of the posting application
    pub package_name: String,
    /// Numeric id of the user profile the notification belongs to
    pub user_id: u32,
    /// Title line, if the notification carries one
    pub title: Option<String>,
    /// Body text, if the notification carries one
    pub text: Option<String>,
    /// Channel the notification was posted on, when known
    pub channel_id: Option<String>,
    /// Whether the platform marked the notification as ongoing
    pub is_ongoing: bool,
    /// Whether this entry is the collapsed header of a notification group
    pub is_group_summary: bool,
    /// When the notification was posted
    pub post_time: DateTime<Utc>,
}

impl StatusNotification {
    /// True when neither title nor text carries any content.
    pub fn is_missing_title_and_text(&self) -> bool {
        let empty = |s: &Option<String>| s.as_deref().map_or(true, str::is_empty);
        empty(&self.title) && empty(&self.text)
    }
}

/// Identity of the application a notification came from: posting package
/// plus the user profile it was posted under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerKey {
    pub package_name: String,
    pub user_id: u32,
}

impl OwnerKey {
    pub fn from_notification(notification: &StatusNotification) -> Self {
        Self {
            package_name: notification.package_name.clone(),
            user_id: notification.user_id,
        }
    }
}

/// Platform key of a single notification instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationKey(pub String);

impl NotificationKey {
    pub fn from_notification(notification: &StatusNotification) -> Self {
        Self(notification.key.clone())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ranking metadata the platform keeps per notification key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRanking {
    /// Whether the notification may contribute to app icon badges
    pub can_show_badge: bool,
    /// Channel id the ranking resolves to, when known
    pub channel_id: Option<String>,
}

impl Default for NotificationRanking {
    fn default() -> Self {
        // Fallback when no ranking is available for a key: treat the
        // notification as badge-eligible and channel-less so the ranking
        // rules never filter it.
        Self {
            can_show_badge: true,
            channel_id: None,
        }
    }
}

/// Raw event handed from the platform callbacks to the background worker.
#[derive(Debug, Clone)]
pub enum ListenerEvent {
    /// A notification was posted or updated
    Posted(StatusNotification),
    /// A notification was removed
    Removed(StatusNotification),
    /// The full active list should be re-read and republished
    FullRefresh,
}

/// Envelope describing one posted notification, built by the background
/// worker and delivered to the observer.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPosted {
    pub owner: OwnerKey,
    pub key: NotificationKey,
    /// Result of the filter predicate at relay time; lets the observer
    /// decide whether the notification participates in badge counts
    pub should_be_filtered_out: bool,
}
