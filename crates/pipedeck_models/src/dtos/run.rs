use super::RuntimeConfigParameters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub enum RunParams {
    EnqueueRun {
        pipeline: String,
        version: String,
        parameters: Option<RuntimeConfigParameters>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::ParamValue;
    use serde_json::json;

    #[test]
    pub fn enqueue_run_serializes_parameters_in_order() {
        let mut parameters = RuntimeConfigParameters::new();
        parameters.insert("epochs".to_string(), ParamValue::Int(20));
        parameters.insert("publish".to_string(), ParamValue::Bool(true));

        let data = RunParams::EnqueueRun {
            pipeline: "train-and-eval".to_string(),
            version: "c4f0a8".to_string(),
            parameters: Some(parameters),
        };

        let actual = serde_json::to_value(&data).unwrap();
        assert_eq!(
            actual,
            json!({
                "EnqueueRun": {
                    "pipeline": "train-and-eval",
                    "version": "c4f0a8",
                    "parameters": {
                        "epochs": 20,
                        "publish": true
                    }
                }
            })
        );
    }
}
