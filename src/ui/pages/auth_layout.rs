use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::use_auth_context;

/// Full-screen backdrop and card shared by the login and signup pages.
///
/// Sends the user home as soon as a session exists, whether it was restored
/// from storage or just created by the form inside.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    let auth = use_auth_context();

    Effect::new(move |_| {
        if auth.is_authenticated() {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    view! {
        <div class="flex flex-col h-screen items-center justify-center bg-gradient-to-r from-gray-950 via-slate-800 to-zinc-900">
            <div class="absolute top-0 left-0">
                <h1 class="text-6xl font-bold p-8 text-white">"BuzzTalk"</h1>
            </div>
            <div class="bg-white p-8 rounded-lg shadow-lg max-w-md w-full">
                {children()}
            </div>
        </div>
    }
}
