use std::sync::{Arc, Mutex};

use api_client::{Config, Http, Notification, Notifier, Route, SessionContext};

/// Test double capturing every notification and navigation the pipeline fires
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
    routes: Mutex<Vec<Route>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }

    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Build a client against the given base URL with a fresh session and a
/// recording notifier
pub fn client_for(base_url: &str) -> (Http, Arc<SessionContext>, Arc<RecordingNotifier>) {
    let session = Arc::new(SessionContext::new());
    let notifier = RecordingNotifier::new();
    let http = Http::new(&Config::new(base_url), session.clone(), notifier.clone());
    (http, session, notifier)
}
