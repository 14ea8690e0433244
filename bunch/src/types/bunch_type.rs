use crate::{
    error::ConstructionError,
    ir::{Bunch, BunchParts, Value},
};
use log::trace;
use std::sync::Arc;

/// A record type produced by [`make_tuple_bunch`](crate::build::make_tuple_bunch).
///
/// Clones share the same descriptor. Two types are equal only when they come
/// from the same factory call.
#[derive(Clone, Debug)]
pub struct BunchType(Arc<BunchTypeInner>);

#[derive(Debug)]
struct BunchTypeInner {
    name: String,
    // Positional fields followed by extra fields.
    names: Vec<String>,
    field_count: usize,
    module: Option<String>,
}

impl BunchType {
    pub(crate) fn new(
        name: impl Into<String>,
        fields: Vec<String>,
        extra_fields: Vec<String>,
        module: Option<String>,
    ) -> Self {
        let field_count = fields.len();
        let mut names = fields;

        names.extend(extra_fields);

        Self(
            BunchTypeInner {
                name: name.into(),
                names,
                field_count,
                module,
            }
            .into(),
        )
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn fields(&self) -> &[String] {
        &self.0.names[..self.0.field_count]
    }

    pub fn extra_fields(&self) -> &[String] {
        &self.0.names[self.0.field_count..]
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.0.names
    }

    pub fn module(&self) -> Option<&str> {
        self.0.module.as_deref()
    }

    pub fn qualified_name(&self) -> String {
        match self.module() {
            Some(module) => format!("{}::{}", module, self.name()),
            None => self.name().into(),
        }
    }

    /// Returns an index into positional fields followed by extra fields.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.0.names.iter().position(|field| field == name)
    }

    /// Binds positional arguments to positional fields in order and keyword
    /// arguments to any field by name.
    pub fn instantiate<K: AsRef<str>, V: Into<Value>>(
        &self,
        arguments: Vec<Value>,
        keyword_arguments: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Bunch, ConstructionError> {
        self.bind(arguments, keyword_arguments)
            .inspect_err(|error| trace!("cannot construct {}: {}", self.name(), error))
    }

    /// Binds every field by keyword.
    pub fn call<K: AsRef<str>, V: Into<Value>>(
        &self,
        keyword_arguments: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Bunch, ConstructionError> {
        self.instantiate(vec![], keyword_arguments)
    }

    /// Rebuilds an instance from the parts returned by [`Bunch::to_parts`].
    pub fn reconstruct(&self, parts: BunchParts) -> Result<Bunch, ConstructionError> {
        let (fields, extra_fields) = parts.into_inner();

        if let Some(name) = extra_fields
            .keys()
            .find(|name| !self.extra_fields().contains(name))
        {
            return Err(ConstructionError::UnexpectedKeyword(name.clone()));
        }

        self.instantiate(fields, extra_fields)
    }

    fn bind<K: AsRef<str>, V: Into<Value>>(
        &self,
        arguments: Vec<Value>,
        keyword_arguments: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Bunch, ConstructionError> {
        if arguments.len() > self.fields().len() {
            return Err(ConstructionError::TooManyArguments {
                expected: self.fields().len(),
                actual: arguments.len(),
            });
        }

        let keyword_arguments = keyword_arguments
            .into_iter()
            .map(|(name, value)| {
                let name = name.as_ref();

                self.field_index(name)
                    .map(|index| (index, value.into()))
                    .ok_or_else(|| ConstructionError::UnexpectedKeyword(name.into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut values = vec![None; self.names().len()];

        for (index, value) in arguments.into_iter().enumerate() {
            values[index] = Some(value);
        }

        for (index, value) in keyword_arguments {
            if values[index].is_some() {
                return Err(ConstructionError::MultipleValues(
                    self.names()[index].clone(),
                ));
            }

            values[index] = Some(value);
        }

        Ok(Bunch::new(
            self.clone(),
            values
                .into_iter()
                .zip(self.names())
                .map(|(value, name)| {
                    value.ok_or_else(|| ConstructionError::MissingArgument(name.clone()))
                })
                .collect::<Result<_, _>>()?,
        ))
    }
}

impl PartialEq for BunchType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for BunchType {}
