mod options;

pub use options::*;
use crate::{
    analysis::name::{self, NameError},
    types::{BunchType, FieldNames},
};
use log::{debug, trace};

/// Creates a tuple bunch type.
///
/// Instances of the type behave as tuples of the positional fields given by
/// `field_names`. Fields in `extra_field_names` are keyword-only and are
/// reachable by name alone.
pub fn make_tuple_bunch(
    type_name: &str,
    field_names: impl Into<FieldNames>,
    extra_field_names: impl Into<FieldNames>,
    options: TupleBunchOptions,
) -> Result<BunchType, NameError> {
    let fields = field_names.into().into_vec();
    let extra_fields = extra_field_names.into().into_vec();

    name::check(type_name, &fields, &extra_fields)
        .inspect_err(|error| trace!("cannot create tuple bunch {}: {}", type_name, error))?;

    let type_ = BunchType::new(
        type_name,
        fields,
        extra_fields,
        options.module().map(String::from),
    );

    debug!(
        "created tuple bunch {} with fields {:?} and extra fields {:?}",
        type_.qualified_name(),
        type_.fields(),
        type_.extra_fields()
    );

    Ok(type_)
}

/// Creates a tuple bunch type labeled with the path of the calling module.
///
/// ```
/// let type_ = bunch::tuple_bunch!("Result", "value info", ["status"]).unwrap();
///
/// assert_eq!(type_.module(), Some(module_path!()));
/// ```
#[macro_export]
macro_rules! tuple_bunch {
    ($type_name:expr, $field_names:expr $(,)?) => {
        $crate::tuple_bunch!(
            $type_name,
            $field_names,
            $crate::types::FieldNames::default()
        )
    };
    ($type_name:expr, $field_names:expr, $extra_field_names:expr $(,)?) => {
        $crate::build::make_tuple_bunch(
            $type_name,
            $field_names,
            $extra_field_names,
            $crate::build::TupleBunchOptions::new().set_module(module_path!()),
        )
    };
}
