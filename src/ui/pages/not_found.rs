//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-4 bg-gradient-to-r from-gray-950 via-slate-800 to-zinc-900 text-white">
            <h1 class="text-6xl font-bold mb-4">"404"</h1>
            <p class="text-gray-300 mb-8">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-md transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
