//! Auth context for the current chat session
//!
//! This module provides a reactive authentication context that:
//! - Holds the session returned by the last successful login or signup
//! - Restores the cached session from localStorage after hydration
//! - Tracks whether a submission is in flight

use leptos::prelude::*;

use crate::core::{Credentials, FieldErrors, Session, SessionState};
#[cfg(not(feature = "ssr"))]
use crate::core::SessionStore;

#[cfg(not(feature = "ssr"))]
use super::client::BrowserStorage;

/// Authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial state, cached session not read yet
    #[default]
    Loading,
    /// No session
    Unauthenticated,
    /// Session present
    Authenticated(Session),
}

/// Auth context providing the session and submission state
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    /// True while a login or signup request is in flight
    pub loading: RwSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::Loading),
            loading: RwSignal::new(false),
        }
    }

    /// Check if a session is present
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::Authenticated(_))
    }

    /// Mark a submission as started.
    ///
    /// Returns false if another submission is already in flight.
    pub fn begin_submit(&self) -> bool {
        if self.loading.get_untracked() {
            return false;
        }
        self.loading.set(true);
        true
    }

    /// Validate into `errors`, then claim the in-flight slot.
    ///
    /// Inline errors are refreshed even while another submission is running.
    pub fn prepare_submit<C: Credentials>(
        &self,
        credentials: &C,
        errors: RwSignal<FieldErrors>,
    ) -> bool {
        let field_errors = credentials.validate();
        let valid = field_errors.is_valid();
        errors.set(field_errors);

        valid && self.begin_submit()
    }

    pub fn end_submit(&self) {
        self.loading.set(false);
    }

    #[cfg_attr(feature = "ssr", allow(dead_code))]
    fn restore(&self, session: Option<Session>) {
        self.state.set(match session {
            Some(session) => AuthState::Authenticated(session),
            None => AuthState::Unauthenticated,
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState for AuthContext {
    fn set_session(&self, session: Session) {
        self.state.set(AuthState::Authenticated(session));
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Loading on both server and client to avoid hydration mismatch
    let ctx = AuthContext::new();

    // Restore the cached session after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let session = SessionStore::new(BrowserStorage).load();
            ctx.restore(session);
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
