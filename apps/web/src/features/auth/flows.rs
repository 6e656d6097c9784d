//! Login, signup and logout flows. Each flow issues exactly one request
//! through `AuthApi`, applies the result to the session store, and reports
//! what the UI should show and where it should go next. Flows never panic on
//! a failed request: every error becomes an error notice.

use crate::{
    app_lib::{AppError, Notice, errors::sanitize_message},
    features::auth::{
        state::SessionStore,
        types::{ApiMessage, LoginRequest, LoginResponse, RegisterRequest, SessionUser},
    },
    routes::paths,
};
use std::{future::Future, pin::Pin};

pub const LOGIN_FALLBACK: &str = "Something went wrong";
pub const SIGNUP_FALLBACK: &str = "Something went wrong. Please try again.";
pub const LOGOUT_FALLBACK: &str = "Unable to log out. Please try again.";

pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + 'a>>;

/// Backend collaborator for the auth flows.
pub trait AuthApi {
    /// Opaque upload handle sent as the `file` part of a signup.
    type Attachment;

    fn login<'a>(&'a self, request: &'a LoginRequest) -> ApiFuture<'a, LoginResponse>;

    fn register<'a>(
        &'a self,
        request: &'a RegisterRequest,
        attachment: Option<&'a Self::Attachment>,
    ) -> ApiFuture<'a, ApiMessage>;

    fn logout(&self) -> ApiFuture<'_, ApiMessage>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowOutcome {
    pub notice: Notice,
    /// Route to navigate to, if the flow moves the user on.
    pub redirect: Option<&'static str>,
}

impl FlowOutcome {
    fn moved(notice: Notice, to: &'static str) -> Self {
        Self {
            notice,
            redirect: Some(to),
        }
    }

    fn stayed(notice: Notice) -> Self {
        Self {
            notice,
            redirect: None,
        }
    }
}

fn success_message(message: Option<&str>, fallback: &str) -> String {
    message
        .and_then(sanitize_message)
        .unwrap_or_else(|| fallback.to_string())
}

fn accept_login(response: LoginResponse) -> Result<(SessionUser, Option<String>), AppError> {
    match response {
        LoginResponse {
            success: true,
            message,
            user: Some(user),
        } => Ok((user, message)),
        LoginResponse {
            success: true,
            user: None,
            ..
        } => Err(AppError::Rejected(None)),
        LoginResponse {
            success: false,
            message,
            ..
        } => Err(AppError::Rejected(message.as_deref().and_then(sanitize_message))),
    }
}

fn accept_message(response: ApiMessage) -> Result<Option<String>, AppError> {
    if response.success {
        Ok(response.message)
    } else {
        Err(AppError::Rejected(
            response.message.as_deref().and_then(sanitize_message),
        ))
    }
}

/// Signs in; on success the returned user becomes the session user and the
/// app goes home.
pub async fn login<A, S>(api: &A, session: &S, request: &LoginRequest) -> FlowOutcome
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    match api.login(request).await.and_then(accept_login) {
        Ok((user, message)) => {
            log::info!("signed in as {} ({})", user.id, user.role);
            session.set(Some(user));
            FlowOutcome::moved(
                Notice::success(success_message(message.as_deref(), "Welcome back")),
                paths::HOME,
            )
        }
        Err(err) => {
            log::warn!("login failed: {err}");
            FlowOutcome::stayed(Notice::error(
                err.server_message().unwrap_or(LOGIN_FALLBACK),
            ))
        }
    }
}

/// Registers an account. No session is created; the user is sent to login.
pub async fn signup<A, S>(
    api: &A,
    session: &S,
    request: &RegisterRequest,
    attachment: Option<&A::Attachment>,
) -> FlowOutcome
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    match api.register(request, attachment).await.and_then(accept_message) {
        Ok(message) => {
            if session.is_authenticated() {
                log::warn!("signup completed while a session is active");
            }
            FlowOutcome::moved(
                Notice::success(success_message(
                    message.as_deref(),
                    "Account created successfully.",
                )),
                paths::LOGIN,
            )
        }
        Err(err) => {
            log::warn!("signup failed: {err}");
            let message = err
                .server_message()
                .or_else(|| err.transport_message())
                .unwrap_or(SIGNUP_FALLBACK);
            FlowOutcome::stayed(Notice::error(message))
        }
    }
}

/// Signs out. The session is cleared only once the server confirms; a
/// request that never completed leaves the session as it was.
pub async fn logout<A, S>(api: &A, session: &S) -> FlowOutcome
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    match api.logout().await.and_then(accept_message) {
        Ok(message) => {
            session.set(None);
            FlowOutcome::moved(
                Notice::success(success_message(
                    message.as_deref(),
                    "Logged out successfully.",
                )),
                paths::HOME,
            )
        }
        Err(err) if err.is_transport() => {
            log::error!("logout did not reach the server: {err}");
            FlowOutcome::stayed(Notice::error(
                err.transport_message().unwrap_or(LOGOUT_FALLBACK),
            ))
        }
        Err(err) => {
            log::warn!("logout failed: {err}");
            FlowOutcome::stayed(Notice::error(
                err.server_message().unwrap_or(LOGOUT_FALLBACK),
            ))
        }
    }
}
