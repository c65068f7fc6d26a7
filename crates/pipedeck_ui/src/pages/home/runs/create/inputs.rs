use crate::components::{input::Input, radio::RadioGroup, textarea::Textarea};
use leptos::*;
use pipedeck_models::dtos::ParamValue;

pub fn parse_number(raw: &str, float: bool) -> Option<ParamValue> {
    if float {
        raw.trim().parse::<f64>().ok().map(ParamValue::Float)
    } else {
        raw.trim().parse::<i64>().ok().map(ParamValue::Int)
    }
}

pub fn is_valid_json(raw: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(raw).is_ok()
}

#[component]
pub fn NumberParamInput(
    #[prop(into)] id: String,
    #[prop(optional)] float: bool,
    #[prop(into)] value: Signal<ParamValue>,
    on_change: Callback<ParamValue>,
) -> impl IntoView {
    let step = if float { "any" } else { "1" };
    view! {
        <Input
            id=id
            input_type={"number".to_string()}
            step=step.to_string()
            value=Signal::derive(move || value.get().to_string())
            on_change=Callback::new(move |raw: String| {
                // edits that aren't a number in the declared mode are dropped
                if let Some(next) = parse_number(&raw, float) {
                    on_change.call(next);
                }
            }) />
    }
}

#[component]
pub fn BooleanParamInput(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<ParamValue>,
    on_change: Callback<ParamValue>,
) -> impl IntoView {
    let selected = Signal::derive(move || match value.get().as_bool() {
        Some(true) => "true".to_string(),
        Some(false) => "false".to_string(),
        None => String::new(),
    });
    view! {
        <RadioGroup
            name=id
            value=selected
            items=vec![
                ("true".to_string(), "True".to_string()),
                ("false".to_string(), "False".to_string()),
            ]
            on_change=Callback::new(move |selected: String| {
                on_change.call(ParamValue::Bool(selected == "true"))
            }) />
    }
}

#[component]
pub fn JsonParamInput(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<ParamValue>,
    on_change: Callback<ParamValue>,
) -> impl IntoView {
    let text = Signal::derive(move || value.get().to_string());
    view! {
        <div class="flex flex-col gap-1">
            <Textarea
                id=id
                rows=4
                class="font-mono text-sm"
                placeholder={"[]".to_string()}
                value=text
                on_change=Callback::new(move |raw: String| {
                    on_change.call(ParamValue::Text(raw))
                }) />
            <Show when=move || !is_valid_json(&text.get()) fallback=|| view! {}>
                <div class="text-sm text-red-400">"Value is not valid JSON."</div>
            </Show>
        </div>
    }
}

#[component]
pub fn TextParamInput(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<ParamValue>,
    on_change: Callback<ParamValue>,
) -> impl IntoView {
    view! {
        <Input
            id=id
            value=Signal::derive(move || value.get().to_string())
            on_change=Callback::new(move |raw: String| {
                on_change.call(ParamValue::Text(raw))
            }) />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn integer_mode_rejects_non_integer_edits() {
        assert_eq!(parse_number("15", false), Some(ParamValue::Int(15)));
        assert_eq!(parse_number(" 15 ", false), Some(ParamValue::Int(15)));
        assert_eq!(parse_number("1.5", false), None);
        assert_eq!(parse_number("epochs", false), None);
    }

    #[test]
    pub fn float_mode_accepts_decimals() {
        assert_eq!(parse_number("1.5", true), Some(ParamValue::Float(1.5)));
        assert_eq!(parse_number("2", true), Some(ParamValue::Float(2.0)));
        assert_eq!(parse_number("", true), None);
    }

    #[test]
    pub fn json_hint_flags_broken_structured_text() {
        assert!(is_valid_json("[1, 2]"));
        assert!(is_valid_json("{\"a\": 1}"));
        assert!(!is_valid_json("{broken"));
    }
}
