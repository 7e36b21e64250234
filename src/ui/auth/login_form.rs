//! Login form component
//!
//! Collects email and password, validates them and submits to `/api/user/login`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::client::browser_workflow;
use super::context::use_auth_context;
use crate::core::{Credentials, FieldErrors, LoginCredentials, SubmitError};
use crate::ui::common::FormField;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to the signup form
    #[prop(optional, into)]
    on_signup_click: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Field errors from the last validation pass
    let errors = RwSignal::new(FieldErrors::new());
    // Re-validate on every keystroke once the user has tried to submit
    let submitted = RwSignal::new(false);

    let credentials =
        move || LoginCredentials::new(email.get_untracked(), password.get_untracked());

    let revalidate = move || {
        if submitted.get_untracked() {
            errors.set(credentials().validate());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set(true);

        let credentials = credentials();
        if !auth.prepare_submit(&credentials, errors) {
            return;
        }

        spawn_local(async move {
            let result = browser_workflow(notifications)
                .submit(&credentials, &auth)
                .await;
            auth.end_submit();

            match result {
                Ok(_) => {
                    errors.set(FieldErrors::new());
                    if let Some(callback) = on_success {
                        callback.run(());
                    }
                }
                Err(SubmitError::Invalid(field_errors)) => errors.set(field_errors),
                Err(_) => {
                    // Reported through the notifier
                }
            }
        });
    };

    let field_error = move |field: &'static str| Signal::derive(move || errors.get().message(field));

    view! {
        <form on:submit=on_submit class="space-y-4" novalidate=true>
            <h1 class="text-3xl font-extrabold text-center text-gray-800 mb-6">
                "Welcome Back!"
            </h1>
            <h2 class="text-xl text-center text-gray-600 mb-6">
                "Login to your "
                <span class="text-blue-600 font-semibold">"Account"</span>
            </h2>

            <FormField
                name="email"
                input_type="email"
                placeholder="Email"
                autocomplete="email"
                value=email
                on_input=Callback::new(move |value| {
                    email.set(value);
                    revalidate();
                })
                error=field_error("email")
                disabled=auth.loading
            />

            <FormField
                name="password"
                input_type="password"
                placeholder="Password"
                autocomplete="current-password"
                value=password
                on_input=Callback::new(move |value| {
                    password.set(value);
                    revalidate();
                })
                error=field_error("password")
                disabled=auth.loading
            />

            <button
                type="submit"
                class="w-full py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700
                       disabled:opacity-50 disabled:cursor-not-allowed transition duration-300"
                disabled=move || auth.loading.get()
            >
                {move || {
                    if auth.loading.get() {
                        view! {
                            <span class="flex items-center justify-center">
                                <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                                "Logging in..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Login"</span> }.into_any()
                    }
                }}
            </button>

            <p class="text-center text-gray-600 mt-4">
                "Don't have an account? "
                <button
                    type="button"
                    class="text-blue-500 underline hover:text-blue-600"
                    on:click=move |_| {
                        if let Some(callback) = on_signup_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Signup"
                </button>
            </p>
        </form>
    }
}
