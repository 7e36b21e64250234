//! Credential submission workflow
//!
//! Validates credentials, posts them to the chat API and, on success, persists
//! the returned session:
//! - Validation failure: no request, per-field errors returned
//! - Success: success notification, session written to storage and UI state
//! - Structured `{ error }` failure: error notification, session untouched
//! - Any other failure: error notification, session untouched

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::credentials::{AuthAction, Credentials};
use super::notification::Notifier;
use super::session::{KeyValueStorage, Session, SessionState, SessionStore};
use super::validation::FieldErrors;

/// Error body returned by the chat API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Raw HTTP response as seen by the workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body, `None` when the body was empty or not JSON
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Server-supplied error message from a `{ error: string }` body
    pub fn error_message(&self) -> Option<String> {
        let body = self.body.as_ref()?;
        serde_json::from_value::<ApiErrorBody>(body.clone())
            .ok()
            .map(|b| b.error)
    }
}

/// Transport-level failures (no usable HTTP response)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Requests are not available in this environment")]
    Unavailable,
}

/// Sends JSON bodies to the chat API
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    async fn post_json(&self, endpoint: &str, body: Value) -> Result<ApiResponse, TransportError>;
}

/// Submission error types
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Invalid form: {0}")]
    Invalid(FieldErrors),

    #[error("{0}")]
    Rejected(String),

    #[error("Server returned an empty session")]
    EmptySession,

    #[error("Unexpected response from server (status {status})")]
    Unexpected { status: u16 },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to encode credentials: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SubmitError {
    /// Field errors, if the submission never left the client
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    /// Text for the failure notification
    pub fn notification_message(&self) -> String {
        format!("Error: {}", self)
    }
}

/// Runs credential submissions against a transport, a session store and a notifier
pub struct AuthWorkflow<T, S, N> {
    transport: T,
    sessions: SessionStore<S>,
    notifier: N,
}

impl<T, S, N> AuthWorkflow<T, S, N>
where
    T: AuthTransport,
    S: KeyValueStorage,
    N: Notifier,
{
    pub fn new(transport: T, sessions: SessionStore<S>, notifier: N) -> Self {
        Self {
            transport,
            sessions,
            notifier,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Validate and submit credentials.
    ///
    /// Validation failures are returned without touching the network or the
    /// notifier; the form renders them inline. Every other failure is also
    /// reported through the notifier.
    pub async fn submit<C, U>(&self, credentials: &C, state: &U) -> Result<Session, SubmitError>
    where
        C: Credentials,
        U: SessionState,
    {
        credentials
            .validate()
            .to_result()
            .map_err(SubmitError::Invalid)?;

        let action = C::ACTION;
        let result = self.send(action, credentials).await;

        match result {
            Ok(session) => {
                self.notifier
                    .success(action.label(), action.success_message());

                if let Err(e) = self.sessions.save(&session) {
                    leptos::logging::warn!("{} succeeded but session was not cached: {}", action.label(), e);
                }
                state.set_session(session.clone());

                leptos::logging::log!("{} succeeded", action.label());
                Ok(session)
            }
            Err(e) => {
                leptos::logging::warn!("{} failed: {}", action.label(), e);
                self.notifier
                    .error(action.label(), e.notification_message());
                Err(e)
            }
        }
    }

    async fn send<C: Credentials>(
        &self,
        action: AuthAction,
        credentials: &C,
    ) -> Result<Session, SubmitError> {
        let body = serde_json::to_value(credentials)?;

        let response = self.transport.post_json(action.endpoint(), body).await?;

        if response.is_success() {
            return response
                .body
                .and_then(Session::from_response)
                .ok_or(SubmitError::EmptySession);
        }

        match response.error_message() {
            Some(message) => Err(SubmitError::Rejected(message)),
            None => Err(SubmitError::Unexpected {
                status: response.status,
            }),
        }
    }
}
