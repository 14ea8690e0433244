use crate::analysis::name::NameError;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, PartialEq)]
pub enum ConstructionError {
    MissingArgument(String),
    MultipleValues(String),
    TooManyArguments { expected: usize, actual: usize },
    UnexpectedKeyword(String),
}

impl Display for ConstructionError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::MissingArgument(name) => write!(formatter, "missing argument '{}'", name),
            Self::MultipleValues(name) => {
                write!(formatter, "got multiple values for argument '{}'", name)
            }
            Self::TooManyArguments { expected, actual } => write!(
                formatter,
                "takes {} positional arguments but {} were given",
                expected, actual
            ),
            Self::UnexpectedKeyword(name) => {
                write!(formatter, "unexpected keyword argument '{}'", name)
            }
        }
    }
}

impl Error for ConstructionError {}

#[derive(Clone, Debug, PartialEq)]
pub enum AttributeError {
    NotFound { type_name: String, name: String },
    ReadOnly { type_name: String, name: String },
}

impl Display for AttributeError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::NotFound { type_name, name } => {
                write!(formatter, "'{}' object has no attribute '{}'", type_name, name)
            }
            Self::ReadOnly { type_name, name } => write!(
                formatter,
                "can't set attribute '{}' of '{}' object",
                name, type_name
            ),
        }
    }
}

impl Error for AttributeError {}

#[derive(Clone, Debug, PartialEq)]
pub enum BunchError {
    Attribute(AttributeError),
    Construction(ConstructionError),
    Name(NameError),
}

impl Display for BunchError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Attribute(error) => write!(formatter, "{}", error),
            Self::Construction(error) => write!(formatter, "{}", error),
            Self::Name(error) => write!(formatter, "{}", error),
        }
    }
}

impl Error for BunchError {}

impl From<AttributeError> for BunchError {
    fn from(error: AttributeError) -> Self {
        Self::Attribute(error)
    }
}

impl From<ConstructionError> for BunchError {
    fn from(error: ConstructionError) -> Self {
        Self::Construction(error)
    }
}

impl From<NameError> for BunchError {
    fn from(error: NameError) -> Self {
        Self::Name(error)
    }
}
