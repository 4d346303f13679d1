/// Notification and navigation hooks
///
/// The HTTP pipeline's side effects (toasts, the login redirect) surface
/// through this trait; the UI layer supplies the implementation.

/// A user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// Application routes the client can force navigation to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
    fn navigate(&self, route: Route);
}

/// Default hook implementation that emits through tracing; useful for
/// headless consumers and as a placeholder before the UI wires in its own.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::warn!(
            title = %notification.title,
            text = %notification.text,
            "notification"
        );
    }

    fn navigate(&self, route: Route) {
        tracing::info!(?route, "navigation requested");
    }
}
