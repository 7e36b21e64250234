//! Login page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::auth_layout::AuthLayout;
use crate::ui::auth::LoginForm;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    // Switch to signup page
    let on_signup_click = move |_| {
        let navigate = use_navigate();
        navigate("/signup", Default::default());
    };

    view! {
        <AuthLayout>
            <LoginForm on_signup_click=Callback::new(on_signup_click) />
        </AuthLayout>
    }
}
