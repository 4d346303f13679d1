/// Ripple API Client
///
/// Typed client for the Ripple content-sharing API, consumed by the UI
/// layer. One shared [`Http`] instance carries the cross-cutting behavior:
/// it attaches the session's bearer token to every request and classifies
/// every response, surfacing user-visible notifications (and the login
/// redirect) through the injected [`Notifier`] before propagating the
/// classified error to the caller.
///
/// # Modules
///
/// - `http`: the shared HTTP client core and response classification
/// - `services`: per-resource functions (auth, contents)
/// - `session`: the injectable session context (user, token)
/// - `notify`: notification/navigation hooks implemented by the UI
/// - `models`: request forms and response payloads
/// - `error`: the closed set of classified request failures
/// - `config`: backend endpoint configuration
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod notify;
pub mod services;
pub mod session;

pub use config::Config;
pub use error::ApiError;
pub use http::Http;
pub use notify::{LogNotifier, Notification, NotificationKind, Notifier, Route};
pub use session::SessionContext;
