use leptos::*;

#[component]
pub fn Input(
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] input_type: Option<String>,
    #[prop(optional)] step: Option<String>,
    #[prop(optional)] placeholder: Option<String>,
    #[prop(optional)] id: Option<String>,
) -> impl IntoView {
    view! {
        <input
            id=id
            type=input_type
            step=step
            class="border border-slate-800 bg-slate-600 rounded p-2 min-h-[45px] w-full"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_change {
                    handler.call(event_target_value(&ev));
                }
            } />
    }
}
