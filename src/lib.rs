/// Notification listener and relay for home screen launcher integration
///
/// This crate adapts the host platform's notification pipeline into a small
/// in-process event relay:
///
/// - Platform callbacks (posted, removed, connected, disconnected) are
///   enqueued on a background worker without blocking the callback context
/// - The worker denormalizes each event, applies the display filter and
///   hands the result to a foreground dispatcher
/// - The dispatcher delivers to the single registered observer, which is
///   typically the launcher's badge/popup model
/// - A registry object exposes connection state and observer registration
///   without implicit globals
pub mod config;
pub mod error;
pub mod filter;
pub mod listener;
pub mod observer;
pub mod registry;
mod relay;
pub mod source;
pub mod types;

pub use config::PlatformCapabilities;
pub use error::{Error, Result};
pub use listener::NotificationListener;
pub use observer::NotificationObserver;
pub use registry::ListenerRegistry;
pub use source::NotificationSource;
pub use types::{
    ListenerEvent, NotificationKey, NotificationPosted, NotificationRanking, OwnerKey,
    StatusNotification, DEFAULT_CHANNEL_ID,
};
