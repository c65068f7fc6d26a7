use leptos::*;

#[component]
pub fn RadioGroup(
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    items: Vec<(String, String)>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="flex gap-6 min-h-[45px] items-center">
            {items
                .into_iter()
                .map(|(item_value, label)| {
                    let checked = {
                        let item_value = item_value.clone();
                        move || value.get() == item_value
                    };
                    let select = {
                        let item_value = item_value.clone();
                        move |_| {
                            if let Some(handler) = on_change {
                                handler.call(item_value.clone());
                            }
                        }
                    };
                    view! {
                        <label class="flex items-center gap-2 hover:cursor-pointer">
                            <input
                                type="radio"
                                class="accent-teal-600"
                                name=name.clone()
                                value=item_value.clone()
                                prop:checked=checked
                                on:change=select />
                            <div>{label}</div>
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
