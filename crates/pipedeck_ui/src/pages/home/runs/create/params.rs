use super::inputs::{BooleanParamInput, JsonParamInput, NumberParamInput, TextParamInput};
use crate::components::{badge::Badge, card::Card};
use leptos::*;
use pipedeck_models::dtos::{
    with_value, InputParameter, ParamValue, ParameterType, PipelineVersion,
    RuntimeConfigParameters,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    MissingVersion,
    NoParameters,
    Editable,
}

pub fn section_state(
    version: Option<&PipelineVersion>,
    params: &RuntimeConfigParameters,
) -> SectionState {
    match version {
        None => SectionState::MissingVersion,
        Some(_) if params.is_empty() => SectionState::NoParameters,
        Some(_) => SectionState::Editable,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamWidget {
    Integer,
    Double,
    Toggle,
    Json,
    Text,
}

pub fn widget_for(parameter_type: Option<ParameterType>) -> ParamWidget {
    match parameter_type {
        Some(ParameterType::Integer) => ParamWidget::Integer,
        Some(ParameterType::Double) => ParamWidget::Double,
        Some(ParameterType::Boolean) => ParamWidget::Toggle,
        Some(ParameterType::List) | Some(ParameterType::Struct) => ParamWidget::Json,
        Some(ParameterType::String) | None => ParamWidget::Text,
    }
}

#[component]
fn ParamField(
    name: String,
    #[prop(into)] version: Signal<Option<PipelineVersion>>,
    #[prop(into)] params: Signal<RuntimeConfigParameters>,
    on_change: Callback<RuntimeConfigParameters>,
) -> impl IntoView {
    let declaration = version
        .get_untracked()
        .and_then(|v| {
            v.input_parameters()
                .and_then(|inputs| inputs.get(&name).cloned())
        })
        .unwrap_or_default();
    let InputParameter {
        parameter_type,
        is_optional,
        description,
        ..
    } = declaration;

    let value = {
        let name = name.clone();
        Signal::derive(move || params.get().get(&name).cloned().unwrap_or_default())
    };

    let edit = {
        let name = name.clone();
        Callback::new(move |next: ParamValue| {
            on_change.call(with_value(&params.get_untracked(), &name, next));
        })
    };

    let input = match widget_for(parameter_type) {
        ParamWidget::Integer => {
            view! { <NumberParamInput id=name.clone() value=value on_change=edit/> }.into_view()
        }
        ParamWidget::Double => {
            view! { <NumberParamInput id=name.clone() float=true value=value on_change=edit/> }
                .into_view()
        }
        ParamWidget::Toggle => {
            view! { <BooleanParamInput id=name.clone() value=value on_change=edit/> }.into_view()
        }
        ParamWidget::Json => {
            view! { <JsonParamInput id=name.clone() value=value on_change=edit/> }.into_view()
        }
        ParamWidget::Text => {
            view! { <TextParamInput id=name.clone() value=value on_change=edit/> }.into_view()
        }
    };

    view! {
        <div>
            <label for=name.clone() class="break-all">
                {name.clone()}
                {(!is_optional).then(|| view! { <span class="text-red-400 ml-1">"*"</span> })}
            </label>
        </div>
        <div class="col-span-2 flex flex-col gap-1">
            {input}
            {description.map(|text| view! { <div class="text-sm text-gray-400">{text}</div> })}
        </div>
    }
}

#[component]
pub fn RunParamsSection(
    #[prop(into)] version: Signal<Option<PipelineVersion>>,
    #[prop(into)] params: Signal<RuntimeConfigParameters>,
    on_change: Callback<RuntimeConfigParameters>,
) -> impl IntoView {
    let state = move || section_state(version.get().as_ref(), &params.get());

    view! {
        <Card>
            <div class="flex flex-col px-8 py-12 gap-4 max-h-[600px]">
                <div class="text-2xl">"Parameters"</div>
                <div class="text-gray-400 mb-8">
                    "Specify parameters required by the pipeline."
                </div>
                <Show when=move || state() == SectionState::MissingVersion fallback=|| view! {}>
                    <div class="flex-shrink">
                        <Badge>
                            "You must select a pipeline and version before you can set parameters."
                        </Badge>
                    </div>
                </Show>
                <Show when=move || state() == SectionState::NoParameters fallback=|| view! {}>
                    <div class="flex-shrink">
                        <Badge>"This pipeline has no parameters."</Badge>
                    </div>
                </Show>
                <Show when=move || state() == SectionState::Editable fallback=|| view! {}>
                    <div class="grid grid-cols-3 gap-4 items-center">
                        <For
                            each={move || params.get().keys().cloned().collect::<Vec<_>>()}
                            key=|name| name.clone()
                            let:name>
                            <ParamField
                                name=name
                                version=version
                                params=params
                                on_change=on_change/>
                        </For>
                    </div>
                </Show>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipedeck_models::dtos::PipelineSpec;

    fn version_with(inputs: Vec<(&str, InputParameter)>) -> PipelineVersion {
        let mut spec = PipelineSpec::default();
        for (name, input) in inputs {
            spec.inputs.insert(name.to_string(), input);
        }
        PipelineVersion {
            id: "c4f0a8".to_string(),
            name: "train-and-eval".to_string(),
            description: None,
            spec: Some(spec),
        }
    }

    #[test]
    pub fn missing_version_shows_the_selection_notice() {
        let params = RuntimeConfigParameters::new();
        assert_eq!(section_state(None, &params), SectionState::MissingVersion);
    }

    #[test]
    pub fn version_without_parameters_shows_the_empty_notice() {
        let version = version_with(vec![]);
        let params = RuntimeConfigParameters::new();
        assert_eq!(
            section_state(Some(&version), &params),
            SectionState::NoParameters
        );
    }

    #[test]
    pub fn declared_integer_gets_the_number_widget() {
        let version = version_with(vec![(
            "epochs",
            InputParameter {
                parameter_type: Some(ParameterType::Integer),
                ..Default::default()
            },
        )]);
        let mut params = RuntimeConfigParameters::new();
        params.insert("epochs".to_string(), ParamValue::Int(1));

        assert_eq!(
            section_state(Some(&version), &params),
            SectionState::Editable
        );
        let declared = version.input_parameters().unwrap()["epochs"].parameter_type;
        assert_eq!(widget_for(declared), ParamWidget::Integer);
    }

    #[test]
    pub fn declared_boolean_gets_the_radio_widget() {
        let version = version_with(vec![(
            "publish",
            InputParameter {
                parameter_type: Some(ParameterType::Boolean),
                ..Default::default()
            },
        )]);

        let declared = version.input_parameters().unwrap()["publish"].parameter_type;
        assert_eq!(widget_for(declared), ParamWidget::Toggle);
    }

    #[test]
    pub fn structured_types_share_the_json_widget() {
        assert_eq!(widget_for(Some(ParameterType::List)), ParamWidget::Json);
        assert_eq!(widget_for(Some(ParameterType::Struct)), ParamWidget::Json);
        assert_eq!(widget_for(Some(ParameterType::Double)), ParamWidget::Double);
        assert_eq!(widget_for(Some(ParameterType::String)), ParamWidget::Text);
    }

    #[test]
    pub fn undeclared_parameter_falls_back_to_plain_text() {
        let version = version_with(vec![]);

        let declared = version
            .input_parameters()
            .unwrap()
            .get("mystery")
            .cloned()
            .unwrap_or_default();

        assert_eq!(declared.parameter_type, None);
        assert!(!declared.is_optional);
        assert_eq!(declared.description, None);
        assert_eq!(widget_for(declared.parameter_type), ParamWidget::Text);
    }
}
