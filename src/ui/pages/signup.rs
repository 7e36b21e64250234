//! Signup page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::auth_layout::AuthLayout;
use crate::ui::auth::SignupForm;

/// Signup page component
#[component]
pub fn SignupPage() -> impl IntoView {
    let on_login_click = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <AuthLayout>
            <SignupForm on_login_click=Callback::new(on_login_click) />
        </AuthLayout>
    }
}
