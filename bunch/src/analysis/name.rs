mod error;
mod keyword;

pub use self::error::NameError;
pub use self::keyword::is_keyword;
use fnv::FnvHashSet;
use once_cell::sync::Lazy;
use regex::Regex;

const RESERVED_PREFIX: char = '_';

static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*$").unwrap());

/// Checks a type name and its field names.
///
/// Every name must be an identifier which is not a keyword. Field names must
/// not start with an underscore nor appear twice across positional and extra
/// fields.
pub fn check(
    type_name: &str,
    fields: &[String],
    extra_fields: &[String],
) -> Result<(), NameError> {
    for name in [type_name]
        .into_iter()
        .chain(fields.iter().chain(extra_fields).map(String::as_str))
    {
        check_identifier(name)?;
    }

    let mut names = FnvHashSet::default();

    for name in fields.iter().chain(extra_fields) {
        if name.starts_with(RESERVED_PREFIX) {
            return Err(NameError::ReservedPrefix(name.clone()));
        }

        check_name(name, &mut names)?;
    }

    Ok(())
}

pub fn is_identifier(name: &str) -> bool {
    name != "_" && IDENTIFIER_REGEX.is_match(name)
}

fn check_identifier(name: &str) -> Result<(), NameError> {
    if !is_identifier(name) {
        return Err(NameError::InvalidIdentifier(name.into()));
    } else if is_keyword(name) {
        return Err(NameError::Keyword(name.into()));
    }

    Ok(())
}

fn check_name<'a>(name: &'a str, names: &mut FnvHashSet<&'a str>) -> Result<(), NameError> {
    if names.contains(name) {
        return Err(NameError::DuplicateName(name.into()));
    }

    names.insert(name);

    Ok(())
}
