//! Signup form component
//!
//! Collects full name, email, password and confirmation. Mismatched passwords
//! are caught before anything is sent to `/api/user/signup`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::client::browser_workflow;
use super::context::use_auth_context;
use crate::core::{Credentials, FieldErrors, SignupCredentials, SubmitError};
use crate::ui::common::FormField;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Signup form component
#[component]
pub fn SignupForm(
    /// Callback when signup is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Callback to switch to the login form
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    // Form state
    let fullname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let errors = RwSignal::new(FieldErrors::new());
    let submitted = RwSignal::new(false);

    let credentials = move || {
        SignupCredentials::new(
            fullname.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
            confirm_password.get_untracked(),
        )
    };

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
    let password_type = Signal::derive(move || if show_password.get() { "text" } else { "password" });
    let input = move |target: RwSignal<String>| {
        Callback::new(move |value: String| {
            target.set(value);
            revalidate();
        })
    };

    view! {
        <form on:submit=on_submit class="space-y-4" novalidate=true>
            <h1 class="text-3xl font-bold text-center text-gray-700 mb-4">
                "Create an Account"
            </h1>

            <FormField
                name="fullname"
                placeholder="Fullname"
                autocomplete="name"
                value=fullname
                on_input=input(fullname)
                error=field_error("fullname")
                disabled=auth.loading
            />

            <FormField
                name="email"
                input_type="email"
                placeholder="Email"
                autocomplete="email"
                value=email
                on_input=input(email)
                error=field_error("email")
                disabled=auth.loading
            />

            {move || {
                // Input type switches with the visibility toggle
                let input_type = password_type.get();
                view! {
                    <FormField
                        name="password"
                        input_type=input_type
                        placeholder="Password"
                        autocomplete="new-password"
                        value=password
                        on_input=input(password)
                        error=field_error("password")
                        disabled=auth.loading
                    />
                    <FormField
                        name="confirmPassword"
                        input_type=input_type
                        placeholder="Confirm Password"
                        autocomplete="new-password"
                        value=confirm_password
                        on_input=input(confirm_password)
                        error=field_error("confirmPassword")
                        disabled=auth.loading
                    />
                }
            }}

            <button
                type="button"
                class="flex items-center gap-2 text-sm text-gray-500 hover:text-gray-700"
                on:click=move |_| show_password.update(|v| *v = !*v)
            >
                {move || {
                    if show_password.get() {
                        view! { <Icon name=icons::EYE_CLOSED class="h-4 w-4" /> }.into_any()
                    } else {
                        view! { <Icon name=icons::EYE class="h-4 w-4" /> }.into_any()
                    }
                }}
                {move || if show_password.get() { "Hide passwords" } else { "Show passwords" }}
            </button>

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
                                "Creating account..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Signup"</span> }.into_any()
                    }
                }}
            </button>

            <p class="text-center text-gray-600">
                "Already have an account? "
                <button
                    type="button"
                    class="text-blue-600 hover:underline"
                    on:click=move |_| {
                        if let Some(callback) = on_login_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Login"
                </button>
            </p>
        </form>
    }
}
