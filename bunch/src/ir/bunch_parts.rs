use super::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A tuple bunch reduced to its positional tuple and extra field mapping.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct BunchParts {
    fields: Vec<Value>,
    extra_fields: IndexMap<String, Value>,
}

impl BunchParts {
    pub fn new(fields: Vec<Value>, extra_fields: IndexMap<String, Value>) -> Self {
        Self {
            fields,
            extra_fields,
        }
    }

    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    pub fn extra_fields(&self) -> &IndexMap<String, Value> {
        &self.extra_fields
    }

    pub fn into_inner(self) -> (Vec<Value>, IndexMap<String, Value>) {
        (self.fields, self.extra_fields)
    }
}
