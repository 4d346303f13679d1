use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::ApiError;
use crate::notify::{Notification, Notifier, Route};
use crate::session::SessionContext;

const VALIDATION_FALLBACK_TEXT: &str = "Please check your input.";
const SERVER_ERROR_FALLBACK_TEXT: &str = "An unexpected error occurred.";

/// The shared HTTP client core.
///
/// Every request goes out with `Accept: application/json`, the
/// `X-Requested-With` marker and, when the session holds one, an
/// `Authorization: Bearer` header. Every response runs through status
/// classification, which fires the user-visible side effect for the status
/// and then propagates the classified error; it never swallows a failure.
pub struct Http {
    base_url: String,
    inner: reqwest::Client,
    session: Arc<SessionContext>,
    notifier: Arc<dyn Notifier>,
}

impl Http {
    pub fn new(
        config: &Config,
        session: Arc<SessionContext>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));

        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            inner,
            session,
            notifier,
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub async fn get(&self, path: &str) -> Result<Response, ApiError> {
        self.execute(self.inner.get(self.url(path))).await
    }

    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response, ApiError> {
        self.execute(self.inner.get(self.url(path)).query(query)).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.execute(self.inner.post(self.url(path)).json(body)).await
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Response, ApiError> {
        self.execute(self.inner.post(self.url(path)).multipart(form))
            .await
    }

    pub async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.execute(self.inner.patch(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, ApiError> {
        self.execute(self.inner.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let builder = match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                self.notifier.notify(Notification::error(
                    "Network Error",
                    "Could not connect to the server.",
                ));
                return Err(ApiError::Network(err));
            }
        };

        self.classify(response).await
    }

    /// Status classification: fire the user-visible side effect for the
    /// status, then propagate the classified error. Statuses outside the
    /// table (including 404) pass through unchanged.
    async fn classify(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status().as_u16();

        match status {
            401 | 419 => {
                self.notifier.navigate(Route::Login);
                self.notifier.notify(Notification::error(
                    "Unauthenticated",
                    "You are not logged in",
                ));
                Err(ApiError::Unauthenticated { status })
            }
            400 => {
                let message = server_message(json_body(response).await).unwrap_or_default();
                self.notifier.notify(Notification::error("", message.clone()));
                Err(ApiError::BadRequest { message })
            }
            403 => {
                let message = server_message(json_body(response).await).unwrap_or_default();
                self.notifier
                    .notify(Notification::error("Forbidden", message.clone()));
                Err(ApiError::Forbidden { message })
            }
            422 => {
                let errors = validation_errors(&json_body(response).await);
                let message = flatten_messages(&errors);
                let text = if message.is_empty() {
                    VALIDATION_FALLBACK_TEXT.to_string()
                } else {
                    message.clone()
                };
                self.notifier
                    .notify(Notification::error("Validation Error", text));
                Err(ApiError::Validation { message, errors })
            }
            500 => {
                let message = server_message(json_body(response).await)
                    .unwrap_or_else(|| SERVER_ERROR_FALLBACK_TEXT.to_string());
                self.notifier
                    .notify(Notification::error("Server Error", message.clone()));
                Err(ApiError::Server { message })
            }
            _ => Ok(response),
        }
    }
}

async fn json_body(response: Response) -> Value {
    response.json().await.unwrap_or(Value::Null)
}

fn server_message(body: Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Pull the `{errors: {field: [messages]}}` map out of a validation body
fn validation_errors(body: &Value) -> BTreeMap<String, Vec<String>> {
    let mut map = BTreeMap::new();

    if let Some(fields) = body.get("errors").and_then(Value::as_object) {
        for (field, messages) in fields {
            let messages: Vec<String> = messages
                .as_array()
                .map(|list| {
                    list.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            map.insert(field.clone(), messages);
        }
    }

    map
}

/// Join every field message into one newline-separated text block
fn flatten_messages(errors: &BTreeMap<String, Vec<String>>) -> String {
    let mut text = String::new();
    for messages in errors.values() {
        for message in messages {
            text.push('\n');
            text.push_str(message);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_errors_extracts_all_fields() {
        let body = json!({
            "message": "The given data was invalid.",
            "errors": {"a": ["x"], "b": ["y", "z"]}
        });

        let errors = validation_errors(&body);
        assert_eq!(errors["a"], vec!["x"]);
        assert_eq!(errors["b"], vec!["y", "z"]);
    }

    #[test]
    fn test_validation_errors_tolerates_missing_map() {
        assert!(validation_errors(&json!({"message": "nope"})).is_empty());
        assert!(validation_errors(&Value::Null).is_empty());
    }

    #[test]
    fn test_flatten_puts_each_message_on_its_own_line() {
        let body = json!({"errors": {"a": ["x"], "b": ["y", "z"]}});
        let text = flatten_messages(&validation_errors(&body));

        assert_eq!(text, "\nx\ny\nz");
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_flatten_empty_map_is_empty() {
        assert!(flatten_messages(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_server_message() {
        assert_eq!(
            server_message(json!({"message": "boom"})),
            Some("boom".to_string())
        );
        assert_eq!(server_message(json!({"error": "boom"})), None);
    }
}
