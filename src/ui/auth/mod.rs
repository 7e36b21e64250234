//! Authentication UI module
//!
//! Login and signup forms plus the context that holds the current session.

mod client;
mod context;
mod login_form;
mod signup_form;

pub use client::{BrowserStorage, BrowserWorkflow, FetchTransport, browser_workflow};
pub use context::{AuthContext, AuthState, provide_auth_context, use_auth_context};
pub use login_form::LoginForm;
pub use signup_form::SignupForm;
