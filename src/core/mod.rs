//! Core domain models and business logic for credential submission

#[cfg(feature = "ssr")]
pub mod config;
pub mod credentials;
pub mod notification;
#[cfg(feature = "ssr")]
pub mod proxy;
pub mod session;
pub mod submit;
pub mod validation;

pub use credentials::{AuthAction, Credentials, LoginCredentials, SignupCredentials};
pub use notification::{Notification, NotificationType, Notifier};
pub use session::{
    KeyValueStorage, SESSION_STORAGE_KEY, Session, SessionState, SessionStore, StorageError,
};
pub use submit::{ApiErrorBody, ApiResponse, AuthTransport, AuthWorkflow, SubmitError, TransportError};
pub use validation::{FieldErrors, FieldSpec, FormSchema, Rule, ValidationError};
