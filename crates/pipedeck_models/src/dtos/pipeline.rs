use super::{InputParameter, RuntimeConfigParameters};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineSpec {
    #[serde(default)]
    pub inputs: IndexMap<String, InputParameter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineVersion {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub spec: Option<PipelineSpec>,
}

impl PipelineVersion {
    pub fn input_parameters(&self) -> Option<&IndexMap<String, InputParameter>> {
        self.spec.as_ref().map(|spec| &spec.inputs)
    }

    pub fn default_parameters(&self) -> RuntimeConfigParameters {
        let mut params = RuntimeConfigParameters::new();
        let Some(inputs) = self.input_parameters() else {
            return params;
        };
        for (name, input) in inputs {
            let value = input.default_value.clone().unwrap_or_default();
            params.insert(name.to_owned(), value);
        }
        params
    }
}
