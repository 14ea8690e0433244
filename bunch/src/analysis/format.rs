use crate::ir::{Bunch, Value};

/// Formats a tuple bunch as `Name(field=repr, ..., extra_field=str, ...)`.
pub fn format_bunch(bunch: &Bunch) -> String {
    format!(
        "{}({})",
        bunch.type_().name(),
        bunch
            .fields()
            .map(|(name, value)| format!("{}={}", name, format_value(value)))
            .chain(
                bunch
                    .extra_fields()
                    .map(|(name, value)| format!("{}={}", name, value))
            )
            .collect::<Vec<_>>()
            .join(", ")
    )
}

pub fn format_value(value: &Value) -> String {
    match value {
        Value::None => "None".into(),
        Value::Boolean(true) => "True".into(),
        Value::Boolean(false) => "False".into(),
        Value::Integer(integer) => integer.to_string(),
        Value::Float(float) => format_float(*float),
        Value::String(string) => format_string(string),
        Value::Tuple(values) => format_tuple(values),
    }
}

fn format_float(float: f64) -> String {
    if float.is_nan() {
        "nan".into()
    } else if float == f64::INFINITY {
        "inf".into()
    } else if float == f64::NEG_INFINITY {
        "-inf".into()
    } else {
        let formatted = format!("{:?}", float);

        // Exponents carry a sign and at least two digits as in `1e+16`.
        match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };

                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => formatted,
        }
    }
}

fn format_string(string: &str) -> String {
    let quote = if string.contains('\'') && !string.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut formatted = String::with_capacity(string.len() + 2);

    formatted.push(quote);

    for character in string.chars() {
        match character {
            '\\' => formatted.push_str("\\\\"),
            '\n' => formatted.push_str("\\n"),
            '\r' => formatted.push_str("\\r"),
            '\t' => formatted.push_str("\\t"),
            character if character == quote => {
                formatted.push('\\');
                formatted.push(character);
            }
            character if character.is_control() => {
                formatted.push_str(&format!("\\x{:02x}", character as u32))
            }
            character => formatted.push(character),
        }
    }

    formatted.push(quote);

    formatted
}

fn format_tuple(values: &[Value]) -> String {
    match values {
        [value] => format!("({},)", format_value(value)),
        _ => format!(
            "({})",
            values
                .iter()
                .map(format_value)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BunchType;

    #[test]
    fn format_bunch_with_extra_fields() {
        insta::assert_snapshot!(
            format_bunch(
                &BunchType::new(
                    "Result",
                    vec!["value".into(), "info".into()],
                    vec!["status".into()],
                    None
                )
                .call([
                    ("value", Value::from(42)),
                    ("info", "ok".into()),
                    ("status", "done".into())
                ])
                .unwrap()
            ),
            @"Result(value=42, info='ok', status=done)"
        );
    }

    #[test]
    fn format_bunch_without_fields() {
        insta::assert_snapshot!(
            format_bunch(
                &BunchType::new("Empty", vec![], vec![], None)
                    .call(Vec::<(&str, Value)>::new())
                    .unwrap()
            ),
            @"Empty()"
        );
    }

    #[test]
    fn format_bunch_with_nested_values() {
        insta::assert_snapshot!(
            format_bunch(
                &BunchType::new(
                    "Fit",
                    vec!["params".into(), "cov".into()],
                    vec!["message".into(), "success".into()],
                    None
                )
                .call([
                    ("params", Value::from(vec![Value::from(1.5), (-2.0).into()])),
                    ("cov", Value::None),
                    ("message", "converged".into()),
                    ("success", true.into()),
                ])
                .unwrap()
            ),
            @"Fit(params=(1.5, -2.0), cov=None, message=converged, success=True)"
        );
    }

    mod value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn format_scalars() {
            assert_eq!(format_value(&Value::None), "None");
            assert_eq!(format_value(&false.into()), "False");
            assert_eq!(format_value(&(-7).into()), "-7");
        }

        #[test]
        fn format_floats() {
            assert_eq!(format_value(&1.0.into()), "1.0");
            assert_eq!(format_value(&0.25.into()), "0.25");
            assert_eq!(format_value(&f64::NAN.into()), "nan");
            assert_eq!(format_value(&f64::INFINITY.into()), "inf");
            assert_eq!(format_value(&f64::NEG_INFINITY.into()), "-inf");
        }

        #[test]
        fn format_floats_in_scientific_notation() {
            assert_eq!(format_value(&1e16.into()), "1e+16");
            assert_eq!(format_value(&1e-5.into()), "1e-05");
            assert_eq!(format_value(&(-2.5e-7).into()), "-2.5e-07");
            assert_eq!(format_value(&1.5e300.into()), "1.5e+300");
            assert_eq!(format_value(&1e15.into()), "1000000000000000.0");
            assert_eq!(format_value(&1e-4.into()), "0.0001");
        }

        #[test]
        fn format_strings() {
            assert_eq!(format_value(&"ok".into()), "'ok'");
            assert_eq!(format_value(&"it's".into()), "\"it's\"");
            assert_eq!(format_value(&"'\"".into()), "'\\'\"'");
            assert_eq!(format_value(&"a\\b\n".into()), "'a\\\\b\\n'");
            assert_eq!(format_value(&"\u{1}".into()), "'\\x01'");
        }

        #[test]
        fn format_tuples() {
            assert_eq!(format_value(&Value::from(Vec::<Value>::new())), "()");
            assert_eq!(format_value(&Value::from(vec![Value::from(1)])), "(1,)");
            assert_eq!(
                format_value(&Value::from(vec![Value::from(1), "a".into()])),
                "(1, 'a')"
            );
        }
    }
}
