/// Authentication service functions
///
/// Successful login/registration persists the returned identity and token
/// into the session context; logout clears it. Classified failures have
/// already produced their notification inside the HTTP core and are
/// propagated to the caller.
use crate::error::ApiError;
use crate::http::Http;
use crate::models::{AuthPayload, LoginForm, RegisterForm, UserIdentity};
use crate::notify::Route;

pub async fn login(http: &Http, form: &LoginForm) -> Result<UserIdentity, ApiError> {
    let response = http.post_json("login", form).await?;

    match response.status().as_u16() {
        200 => {
            let payload: AuthPayload = response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;

            let session = http.session();
            session.set_user(payload.user.clone());
            session.set_token(payload.token);
            session.set_logged_in(true);

            Ok(payload.user)
        }
        status => Err(ApiError::from_unexpected_status(status)),
    }
}

pub async fn register(http: &Http, form: &RegisterForm) -> Result<UserIdentity, ApiError> {
    let response = match http.post_json("register", form).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "registration failed");
            return Err(err);
        }
    };

    match response.status().as_u16() {
        201 => {
            let payload: AuthPayload = response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;

            let session = http.session();
            session.set_user(payload.user.clone());
            session.set_token(payload.token);
            session.set_logged_in(true);
            http.notifier().navigate(Route::Home);

            Ok(payload.user)
        }
        status => Err(ApiError::from_unexpected_status(status)),
    }
}

pub async fn logout(http: &Http) -> Result<(), ApiError> {
    let response = http.post_json("logout", &serde_json::json!({})).await?;

    match response.status().as_u16() {
        200 => {
            http.session().clear();
            http.notifier().navigate(Route::Login);
            Ok(())
        }
        status => Err(ApiError::from_unexpected_status(status)),
    }
}
