//! Home page component
//!
//! Placeholder for the chat view: greets the signed-in user and sends everyone
//! else to the login page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{AuthState, use_auth_context};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();

    Effect::new(move |_| {
        if auth.state.get() == AuthState::Unauthenticated {
            let navigate = use_navigate();
            navigate("/login", Default::default());
        }
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-r from-gray-950 via-slate-800 to-zinc-900 text-white">
            {move || match auth.state.get() {
                AuthState::Authenticated(session) => {
                    let name = session.display_name().unwrap_or("there").to_string();
                    view! {
                        <div class="text-center space-y-4">
                            <Icon name=icons::CHAT class="w-16 h-16 mx-auto" />
                            <h1 class="text-4xl font-bold">"BuzzTalk"</h1>
                            <p class="text-lg text-gray-300">{format!("Signed in as {}", name)}</p>
                        </div>
                    }.into_any()
                }
                _ => view! {
                    <Icon name=icons::LOADER class="animate-spin w-8 h-8" />
                }.into_any(),
            }}
        </div>
    }
}
