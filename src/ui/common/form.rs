use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Form input with inline validation message
#[component]
pub fn FormField(
    /// Input name and id
    name: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Validation message to display under the input
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Whether field is disabled
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <input
                type=input_type
                id=name
                name=name
                autocomplete=autocomplete
                placeholder=placeholder
                class="w-full px-4 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                class:border-red-500=move || error.get().is_some()
                class:border-gray-300=move || error.get().is_none()
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {move || {
                error.get().map(|err| view! {
                    <p class="flex items-center justify-end gap-1 mt-1 text-sm text-red-500">
                        <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                        <span>{err}</span>
                    </p>
                })
            }}
        </div>
    }
}
