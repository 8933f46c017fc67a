//! Load-time coercion of untyped saved data into typed models.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{error::ROOT_FIELD, Result, YahooError};

/// A model that can be rebuilt from the structured data it was saved as.
pub trait FromStructuredData: Sized {
    /// Name used when reporting construction failures.
    const MODEL_NAME: &'static str;

    fn from_structured_data(value: Value) -> Result<Self>;
}

/// Deserialize `value` into `T`, reporting failures as `ModelConstruction`.
pub fn deserialize_model<T: DeserializeOwned>(model: &str, value: Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|e| YahooError::model_construction(model, e))
}

/// Implement [`FromStructuredData`] for serde models.
#[macro_export]
macro_rules! structured_model {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl $crate::storage::FromStructuredData for $ty {
                const MODEL_NAME: &'static str = $name;

                fn from_structured_data(value: ::serde_json::Value) -> $crate::Result<Self> {
                    $crate::storage::deserialize_model($name, value)
                }
            }
        )+
    };
}

/// Untyped loads are the identity coercion.
impl FromStructuredData for Value {
    const MODEL_NAME: &'static str = "Value";

    fn from_structured_data(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl<M: FromStructuredData> FromStructuredData for Vec<M> {
    const MODEL_NAME: &'static str = "sequence";

    fn from_structured_data(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| M::from_structured_data(item).map_err(|e| e.at_index(i)))
                .collect(),
            other => Err(YahooError::ModelConstruction {
                model: format!("Vec<{}>", M::MODEL_NAME),
                field: ROOT_FIELD.to_string(),
                message: format!("expected a sequence, found {}", value_kind(&other)),
            }),
        }
    }
}

/// One model instance, or a sequence of them when the saved data was a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelData<M> {
    Many(Vec<M>),
    One(M),
}

impl<M> ModelData<M> {
    pub fn into_vec(self) -> Vec<M> {
        match self {
            ModelData::One(m) => vec![m],
            ModelData::Many(ms) => ms,
        }
    }

    pub fn as_one(&self) -> Option<&M> {
        match self {
            ModelData::One(m) => Some(m),
            ModelData::Many(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ModelData::One(_) => 1,
            ModelData::Many(ms) => ms.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<M: FromStructuredData> FromStructuredData for ModelData<M> {
    const MODEL_NAME: &'static str = M::MODEL_NAME;

    fn from_structured_data(value: Value) -> Result<Self> {
        match value {
            Value::Array(_) => Vec::<M>::from_structured_data(value).map(ModelData::Many),
            other => M::from_structured_data(other).map(ModelData::One),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
