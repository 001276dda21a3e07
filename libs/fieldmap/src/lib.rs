//! Conversion between records and flat `name -> value` mappings.
//!
//! Derive [`Record`] on a struct of scalar fields, then use [`flatten`] to
//! read its exported fields into a [`Mapping`] and [`populate`] to write a
//! mapping back into a record through a pointer.

extern crate self as fieldmap;

pub mod error;
pub mod flatten;
pub mod kind;
pub mod populate;
pub mod record;
pub mod reflect;
pub mod value;

pub use fieldmap_derive::Record;

pub use error::MarshalError;
pub use flatten::{flatten, flatten_record};
pub use kind::{Kind, ALLOWED_KINDS};
pub use populate::{populate, populate_record};
pub use record::{FieldDescriptor, FieldInfo, Record};
pub use reflect::{Reflect, Typed};
pub use value::{Mapping, Value};
