use leptos::*;

#[component]
pub fn Button(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = format!(
        "h-[40px] w-full flex-none rounded-lg p-2 focus:outline-none bg-teal-600 hover:bg-teal-700 focus:bg-teal-700 {class}"
    );
    view! { <button class=class>{children()}</button> }
}
