use super::{bunch_parts::BunchParts, value::Value};
use crate::{analysis::format, error::AttributeError, types::BunchType};
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    ops::Index,
    slice,
    sync::Arc,
};

/// An immutable instance of a tuple bunch type.
///
/// It behaves as a tuple of its positional fields. Extra fields are only
/// reachable by name and do not take part in equality, ordering or hashing.
#[derive(Clone, Debug)]
pub struct Bunch {
    type_: BunchType,
    // Positional field values followed by extra field values.
    values: Arc<[Value]>,
}

impl Bunch {
    pub(crate) fn new(type_: BunchType, values: Vec<Value>) -> Self {
        debug_assert_eq!(values.len(), type_.names().len());

        Self {
            type_,
            values: values.into(),
        }
    }

    pub fn type_(&self) -> &BunchType {
        &self.type_
    }

    pub fn len(&self) -> usize {
        self.type_.fields().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values[..self.len()]
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_slice().get(index)
    }

    pub fn iter(&self) -> slice::Iter<Value> {
        self.as_slice().iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.type_
            .fields()
            .iter()
            .map(String::as_str)
            .zip(self.as_slice())
    }

    pub fn extra_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.type_
            .extra_fields()
            .iter()
            .map(String::as_str)
            .zip(&self.values[self.len()..])
    }

    pub fn attribute(&self, name: &str) -> Result<&Value, AttributeError> {
        self.type_
            .field_index(name)
            .map(|index| &self.values[index])
            .ok_or_else(|| AttributeError::NotFound {
                type_name: self.type_.name().into(),
                name: name.into(),
            })
    }

    /// Always fails as every attribute of a tuple bunch is read-only.
    pub fn set_attribute(
        &self,
        name: &str,
        _value: impl Into<Value>,
    ) -> Result<(), AttributeError> {
        Err(AttributeError::ReadOnly {
            type_name: self.type_.name().into(),
            name: name.into(),
        })
    }

    pub fn to_parts(&self) -> BunchParts {
        BunchParts::new(
            self.as_slice().to_vec(),
            self.extra_fields()
                .map(|(name, value)| (name.to_owned(), value.clone()))
                .collect(),
        )
    }
}

impl PartialEq for Bunch {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Bunch {}

impl PartialEq<[Value]> for Bunch {
    fn eq(&self, other: &[Value]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<Vec<Value>> for Bunch {
    fn eq(&self, other: &Vec<Value>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialOrd for Bunch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl Hash for Bunch {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.as_slice().hash(hasher);
    }
}

impl Index<usize> for Bunch {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a Bunch {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Bunch {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", format::format_bunch(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn pair_type() -> BunchType {
        BunchType::new("R", vec!["a".into(), "b".into()], vec!["c".into()], None)
    }

    fn pair(a: i64, b: i64, c: i64) -> Bunch {
        pair_type().call([("a", a), ("b", b), ("c", c)]).unwrap()
    }

    mod sequence {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn view_positional_fields() {
            let bunch = pair(1, 2, 3);

            assert_eq!(bunch.len(), 2);
            assert!(!bunch.is_empty());
            assert_eq!(bunch[0], Value::from(1));
            assert_eq!(bunch[1], Value::from(2));
            assert_eq!(bunch.get(2), None);
            assert_eq!(
                bunch.iter().cloned().collect::<Vec<_>>(),
                vec![Value::from(1), Value::from(2)]
            );
            assert_eq!((&bunch).into_iter().count(), 2);
        }

        #[test]
        #[should_panic]
        fn panic_on_index_of_extra_field() {
            let _ = &pair(1, 2, 3)[2];
        }

        #[test]
        fn view_empty_bunch() {
            let bunch = BunchType::new("Empty", vec![], vec!["x".into()], None)
                .call([("x", 1)])
                .unwrap();

            assert!(bunch.is_empty());
            assert_eq!(bunch.as_slice(), &[] as &[Value]);
        }

        #[test]
        fn list_named_fields() {
            let bunch = pair(1, 2, 3);

            assert_eq!(
                bunch.fields().collect::<Vec<_>>(),
                vec![("a", &Value::from(1)), ("b", &Value::from(2))]
            );
            assert_eq!(
                bunch.extra_fields().collect::<Vec<_>>(),
                vec![("c", &Value::from(3))]
            );
        }
    }

    mod attribute {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn get_positional_and_extra_fields() {
            let bunch = pair(1, 2, 3);

            assert_eq!(bunch.attribute("a"), Ok(&Value::from(1)));
            assert_eq!(bunch.attribute("c"), Ok(&Value::from(3)));
        }

        #[test]
        fn fail_to_get_unknown_attribute() {
            assert_eq!(
                pair(1, 2, 3).attribute("d"),
                Err(AttributeError::NotFound {
                    type_name: "R".into(),
                    name: "d".into()
                })
            );
        }

        #[test]
        fn fail_to_set_attributes() {
            let bunch = pair(1, 2, 3);

            for name in ["a", "b", "c", "d"] {
                assert_eq!(
                    bunch.set_attribute(name, 0),
                    Err(AttributeError::ReadOnly {
                        type_name: "R".into(),
                        name: name.into()
                    })
                );
            }

            assert_eq!(bunch.attribute("a"), Ok(&Value::from(1)));
        }
    }

    mod equality {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn ignore_extra_fields() {
            assert_eq!(pair(1, 2, 10), pair(1, 2, 20));
        }

        #[test]
        fn compare_positional_fields() {
            assert_ne!(pair(1, 2, 10), pair(1, 3, 10));
        }

        #[test]
        fn compare_with_slice() {
            assert!(pair(1, 2, 3) == vec![Value::from(1), Value::from(2)]);
            assert!(pair(1, 2, 3) == *[Value::from(1), Value::from(2.0)].as_slice());
        }

        #[test]
        fn order_lexicographically() {
            assert!(pair(1, 2, 0) < pair(1, 3, 0));
            assert!(pair(2, 0, 0) > pair(1, 9, 0));
        }

        #[test]
        fn hash_positional_fields() {
            let bunches = [pair(1, 2, 10), pair(1, 2, 20), pair(2, 1, 10)]
                .into_iter()
                .collect::<HashSet<_>>();

            assert_eq!(bunches.len(), 2);
        }
    }

    #[test]
    fn reduce_to_parts() {
        let parts = pair(1, 2, 3).to_parts();

        assert_eq!(parts.fields(), &[Value::from(1), Value::from(2)]);
        assert_eq!(
            parts.extra_fields().iter().collect::<Vec<_>>(),
            vec![(&"c".to_string(), &Value::from(3))]
        );
    }
}
