use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the notification listener.
///
/// The platform guarantees well-formed callback payloads, so the only
/// operational failure the crate models is the active-notification query
/// being denied by the platform (seen on some vendor distributions).
#[derive(Error, Debug)]
pub enum Error {
    /// Permission/security denial from the platform notification service
    #[error("notification access denied by the platform: {0}")]
    PermissionDenied(String),
}
