use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\s]+").unwrap());

/// Ordered field names given to the tuple bunch factory.
///
/// A single string is split on commas and whitespace, so `"x, y"`, `"x y"`
/// and `"x,y"` all name the fields `x` and `y`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FieldNames(Vec<String>);

impl FieldNames {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn parse(source: &str) -> Self {
        Self(
            SEPARATOR_REGEX
                .split(source)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for FieldNames {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl From<String> for FieldNames {
    fn from(source: String) -> Self {
        Self::parse(&source)
    }
}

impl<S: AsRef<str>> From<Vec<S>> for FieldNames {
    fn from(names: Vec<S>) -> Self {
        Self::from(names.as_slice())
    }
}

impl<S: AsRef<str>> From<&[S]> for FieldNames {
    fn from(names: &[S]) -> Self {
        Self(names.iter().map(|name| name.as_ref().into()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for FieldNames {
    fn from(names: [S; N]) -> Self {
        Self::from(names.as_slice())
    }
}
