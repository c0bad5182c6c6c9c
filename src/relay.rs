use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::config::PlatformCapabilities;
use crate::error::Result;
use crate::filter;
use crate::observer::ObserverSlot;
use crate::source::NotificationSource;
use crate::types::{
    ListenerEvent, NotificationKey, NotificationPosted, NotificationRanking, OwnerKey,
    StatusNotification,
};

/// Message handed from the background worker to the foreground dispatcher.
#[derive(Debug, Clone)]
pub(crate) enum RelayMessage {
    Posted(NotificationPosted),
    Removed(OwnerKey, NotificationKey),
    FullRefresh(Vec<StatusNotification>),
}

/// Spawn the background worker: consumes raw listener events in arrival
/// order, denormalizes them into relay messages and forwards them to the
/// foreground queue.
pub(crate) fn spawn_worker_loop(
    source: Arc<dyn NotificationSource>,
    caps: PlatformCapabilities,
    connected: Arc<AtomicBool>,
    mut worker_rx: mpsc::UnboundedReceiver<ListenerEvent>,
    ui_tx: mpsc::UnboundedSender<RelayMessage>,
) {
    tokio::spawn(async move {
        while let Some(event) = worker_rx.recv().await {
            match event {
                ListenerEvent::Posted(notification) => {
                    let posted = build_posted(source.as_ref(), caps, &notification).await;
                    forward(&ui_tx, RelayMessage::Posted(posted));
                }
                ListenerEvent::Removed(notification) => {
                    forward(
                        &ui_tx,
                        RelayMessage::Removed(
                            OwnerKey::from_notification(&notification),
                            NotificationKey::from_notification(&notification),
                        ),
                    );
                }
                ListenerEvent::FullRefresh => {
                    let active = if connected.load(Ordering::SeqCst) {
                        match active_filtered(source.as_ref(), caps).await {
                            Ok(active) => active,
                            Err(e) => {
                                // Seen on some vendor platforms: the query is
                                // denied even though the listener is bound.
                                // Drop this cycle, keep the loop alive.
                                error!("Dropping full refresh cycle: {}", e);
                                continue;
                            }
                        }
                    } else {
                        Vec::new()
                    };
                    forward(&ui_tx, RelayMessage::FullRefresh(active));
                }
            }
        }
        debug!("Background relay loop ended");
    });
}

/// Spawn the foreground dispatcher: delivers each relay message to the
/// currently registered observer, or discards it when none is registered.
pub(crate) fn spawn_dispatch_loop(
    observer_slot: ObserverSlot,
    mut ui_rx: mpsc::UnboundedReceiver<RelayMessage>,
) {
    tokio::spawn(async move {
        while let Some(message) = ui_rx.recv().await {
            let current = observer_slot.read().await.clone();
            let Some(observer) = current else {
                // No buffering or replay: a later observer gets a fresh
                // full refresh on registration instead.
                debug!("No observer registered, discarding {:?}", message);
                continue;
            };
            match message {
                RelayMessage::Posted(posted) => observer.on_notification_posted(posted),
                RelayMessage::Removed(owner, key) => observer.on_notification_removed(owner, key),
                RelayMessage::FullRefresh(active) => observer.on_notification_full_refresh(active),
            }
        }
        debug!("Foreground dispatch loop ended");
    });
}

/// Build the envelope for one posted notification, applying the filter
/// predicate against its current ranking.
async fn build_posted(
    source: &dyn NotificationSource,
    caps: PlatformCapabilities,
    notification: &StatusNotification,
) -> NotificationPosted {
    let key = NotificationKey::from_notification(notification);
    let ranking = source.ranking(&key).await.unwrap_or_default();
    NotificationPosted {
        owner: OwnerKey::from_notification(notification),
        should_be_filtered_out: filter::should_be_filtered_out(caps, &ranking, notification),
        key,
    }
}

/// Fetch the active list from the platform and strip the entries the
/// filter predicate rejects.
async fn active_filtered(
    source: &dyn NotificationSource,
    caps: PlatformCapabilities,
) -> Result<Vec<StatusNotification>> {
    let active = source.active_notifications().await?;
    let mut rankings = Vec::with_capacity(active.len());
    for notification in &active {
        let key = NotificationKey::from_notification(notification);
        rankings.push(source.ranking(&key).await.unwrap_or_default());
    }
    Ok(filter::filter_notifications(caps, &rankings, active))
}

fn forward(ui_tx: &mpsc::UnboundedSender<RelayMessage>, message: RelayMessage) {
    if ui_tx.send(message).is_err() {
        warn!("Foreground relay is gone, dropping message");
    }
}
