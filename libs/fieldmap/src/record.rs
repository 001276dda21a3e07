use crate::kind::Kind;
use crate::value::Value;

/// Static description of one record field, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Declared field name, verbatim.
    pub name: &'static str,
    pub kind: Kind,
    /// Declared with `pub` visibility.
    pub exported: bool,
}

/// A field together with its current value.
///
/// `value` is `None` when the field kind is not allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: Kind,
    pub exported: bool,
    pub value: Option<Value>,
}

/// Struct with a fixed set of named fields.
///
/// Implemented by `#[derive(Record)]`; hand-written impls must keep `fields()`,
/// `field()` and `set_field()` in agreement on indices.
pub trait Record {
    fn type_name(&self) -> &'static str;

    /// All fields, exported or not.
    fn fields(&self) -> &'static [FieldInfo];

    /// Current value of the field at `index`. `None` for composite fields and
    /// out-of-range indices.
    fn field(&self, index: usize) -> Option<Value>;

    /// Move `value` into the field at `index`.
    ///
    /// Hands the value back if its type differs from the field type or the
    /// index is out of range. Visibility is not checked here.
    fn set_field(&mut self, index: usize, value: Value) -> Result<(), Value>;

    fn field_index(&self, name: &str) -> Option<usize> {
        self.fields().iter().position(|f| f.name == name)
    }

    fn describe(&self) -> Vec<FieldDescriptor> {
        self.fields()
            .iter()
            .enumerate()
            .map(|(index, info)| FieldDescriptor {
                name: info.name,
                kind: info.kind,
                exported: info.exported,
                value: self.field(index),
            })
            .collect()
    }
}
