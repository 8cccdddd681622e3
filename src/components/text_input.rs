//! Labeled text input with an inline error slot.

use leptos::prelude::*;

/// Controlled input bound to `value`; shows `error` beneath when non-empty.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(into, default = String::from("text"))] input_type: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="text-input">
            <label class="text-input__label">{label}</label>
            <input
                class="text-input__field"
                class=("text-input__field--invalid", move || !error.get().is_empty())
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !error.get().is_empty()>
                <p class="text-input__error" role="alert">
                    {move || error.get()}
                </p>
            </Show>
        </div>
    }
}
