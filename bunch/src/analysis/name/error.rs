use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, PartialEq)]
pub enum NameError {
    DuplicateName(String),
    InvalidIdentifier(String),
    Keyword(String),
    ReservedPrefix(String),
}

impl NameError {
    pub fn name(&self) -> &str {
        match self {
            Self::DuplicateName(name)
            | Self::InvalidIdentifier(name)
            | Self::Keyword(name)
            | Self::ReservedPrefix(name) => name,
        }
    }
}

impl Display for NameError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(formatter, "duplicate field name: '{}'", name),
            Self::InvalidIdentifier(name) => write!(
                formatter,
                "type name and field names must be valid identifiers: '{}'",
                name
            ),
            Self::Keyword(name) => write!(
                formatter,
                "type name and field names cannot be a keyword: '{}'",
                name
            ),
            Self::ReservedPrefix(name) => write!(
                formatter,
                "field names cannot start with an underscore: '{}'",
                name
            ),
        }
    }
}

impl Error for NameError {}
