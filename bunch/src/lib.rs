//! Immutable tuple-like record types with keyword-only extra fields.
//!
//! A tuple bunch type is created at run time from a type name, positional
//! field names and extra field names. Its instances behave as tuples of the
//! positional fields while every field stays readable by name.
//!
//! ```
//! use bunch::{ir::Value, make_tuple_bunch};
//!
//! let type_ = make_tuple_bunch(
//!     "Result",
//!     "value info",
//!     ["status"],
//!     Default::default(),
//! )
//! .unwrap();
//! let result = type_
//!     .call([
//!         ("value", Value::from(42)),
//!         ("info", "ok".into()),
//!         ("status", "done".into()),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0], Value::from(42));
//! assert_eq!(result.attribute("status"), Ok(&Value::from("done")));
//! assert_eq!(result.to_string(), "Result(value=42, info='ok', status=done)");
//! ```

pub mod analysis;
pub mod build;
pub mod error;
pub mod ir;
pub mod types;

pub use build::{make_tuple_bunch, TupleBunchOptions};
pub use error::BunchError;
