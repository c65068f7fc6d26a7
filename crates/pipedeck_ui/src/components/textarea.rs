use leptos::*;

#[component]
pub fn Textarea(
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] placeholder: Option<String>,
    #[prop(optional)] id: Option<String>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let class = format!("border border-slate-800 bg-slate-600 rounded p-2 w-full {class}");
    view! {
        <textarea
            id=id
            class=class
            rows=rows.unwrap_or(3)
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_change {
                    handler.call(event_target_value(&ev));
                }
            }>
            {value.get_untracked()}
        </textarea>
    }
}
