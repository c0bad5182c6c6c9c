use crate::config::PlatformCapabilities;
use crate::types::{NotificationRanking, StatusNotification, DEFAULT_CHANNEL_ID};

/// Decide whether a notification should be hidden from observers.
///
/// Pure and side-effect free; evaluating the same inputs twice yields the
/// same answer. Rules are checked in order, first hit wins:
///
/// 1. The ranking says the notification may not badge (only meaningful on
///    platforms with channel ranking).
/// 2. Ongoing notifications: on platforms with channel ranking the flag
///    only filters inside the legacy default channel; on platforms without
///    it the flag filters unconditionally.
/// 3. Group summary headers are placeholders, never shown individually.
/// 4. Notifications with neither title nor text have nothing to show.
pub fn should_be_filtered_out(
    caps: PlatformCapabilities,
    ranking: &NotificationRanking,
    notification: &StatusNotification,
) -> bool {
    if caps.channel_ranking && !ranking.can_show_badge {
        return true;
    }
    if caps.channel_ranking {
        // Ongoing only counts against the legacy fallback channel here.
        if ranking.channel_id.as_deref() == Some(DEFAULT_CHANNEL_ID) && notification.is_ongoing {
            return true;
        }
    } else if notification.is_ongoing {
        return true;
    }
    notification.is_group_summary || notification.is_missing_title_and_text()
}

/// Drop the entries of `notifications` that the predicate rejects,
/// preserving the platform's order for the rest.
///
/// Rankings are supplied per entry (same indices) so the decision itself
/// stays free of lookups.
pub fn filter_notifications(
    caps: PlatformCapabilities,
    rankings: &[NotificationRanking],
    notifications: Vec<StatusNotification>,
) -> Vec<StatusNotification> {
    let default_ranking = NotificationRanking::default();
    notifications
        .into_iter()
        .enumerate()
        .filter(|(i, notification)| {
            let ranking = rankings.get(*i).unwrap_or(&default_ranking);
            !should_be_filtered_out(caps, ranking, notification)
        })
        .map(|(_, notification)| notification)
        .collect()
}
