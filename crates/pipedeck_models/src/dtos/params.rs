use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    #[serde(rename = "NUMBER_INTEGER")]
    Integer,
    #[serde(rename = "NUMBER_DOUBLE")]
    Double,
    #[serde(rename = "BOOLEAN")]
    Boolean,
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "LIST")]
    List,
    #[serde(rename = "STRUCT")]
    Struct,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "NUMBER_INTEGER",
            Self::Double => "NUMBER_DOUBLE",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::List => "LIST",
            Self::Struct => "STRUCT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NUMBER_INTEGER" => Some(Self::Integer),
            "NUMBER_DOUBLE" => Some(Self::Double),
            "BOOLEAN" => Some(Self::Boolean),
            "STRING" => Some(Self::String),
            "LIST" => Some(Self::List),
            "STRUCT" => Some(Self::Struct),
            _ => None,
        }
    }
}

// A declaration with a type this client doesn't know must still render as a
// plain text field, so unrecognized wire names map to None instead of an error.
fn parameter_type_from_wire<'de, D>(deserializer: D) -> Result<Option<ParameterType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(ParameterType::parse))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl Default for ParamValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// IndexMap so that the entries keep the order in which the pipeline version
// declared them.
pub type RuntimeConfigParameters = IndexMap<String, ParamValue>;

pub fn with_value(
    params: &RuntimeConfigParameters,
    name: &str,
    value: ParamValue,
) -> RuntimeConfigParameters {
    let mut next = params.clone();
    next.insert(name.to_string(), value);
    next
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputParameter {
    #[serde(default, deserialize_with = "parameter_type_from_wire")]
    pub parameter_type: Option<ParameterType>,

    #[serde(default)]
    pub is_optional: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub default_value: Option<ParamValue>,
}
