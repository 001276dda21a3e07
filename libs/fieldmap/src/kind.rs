use std::fmt;

/// Coarse classification of a type.
///
/// The first fourteen variants are the scalar kinds a record field may have.
/// The rest exist so that unsupported fields can still be described and
/// rejected at runtime instead of being invisible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    /// `isize`
    Int,
    I8,
    I16,
    I32,
    I64,
    /// `usize`
    Uint,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// `String`
    Str,

    /// A struct deriving `Record`.
    Record,
    /// References and smart pointers (`&T`, `&mut T`, `Box`, `Rc`, `Arc`).
    Pointer,
    /// `Vec`, `VecDeque`, arrays.
    Sequence,
    /// `HashSet`, `BTreeSet`.
    Set,
    /// `HashMap`, `BTreeMap`.
    Map,
    /// `Option`.
    Optional,
    /// `()` and tuples.
    Tuple,
    /// Primitives outside the allowed set: `char`, `i128`, `u128`.
    Other,
}

/// Kinds a record field may have for `flatten`/`populate` to accept it.
pub const ALLOWED_KINDS: [Kind; 14] = [
    Kind::Bool,
    Kind::Int,
    Kind::I8,
    Kind::I16,
    Kind::I32,
    Kind::I64,
    Kind::Uint,
    Kind::U8,
    Kind::U16,
    Kind::U32,
    Kind::U64,
    Kind::F32,
    Kind::F64,
    Kind::Str,
];

impl Kind {
    pub fn is_allowed(self) -> bool {
        ALLOWED_KINDS.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "isize",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::Uint => "usize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Str => "String",
            Kind::Record => "record",
            Kind::Pointer => "pointer",
            Kind::Sequence => "sequence",
            Kind::Set => "set",
            Kind::Map => "map",
            Kind::Optional => "optional",
            Kind::Tuple => "tuple",
            Kind::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kinds_are_allowed() {
        for kind in ALLOWED_KINDS {
            assert!(kind.is_allowed(), "{kind} should be allowed");
        }
    }

    #[test]
    fn composite_kinds_are_rejected() {
        for kind in [
            Kind::Record,
            Kind::Pointer,
            Kind::Sequence,
            Kind::Set,
            Kind::Map,
            Kind::Optional,
            Kind::Tuple,
            Kind::Other,
        ] {
            assert!(!kind.is_allowed(), "{kind} should be rejected");
        }
    }

    #[test]
    fn display_uses_rust_type_names() {
        assert_eq!(Kind::Int.to_string(), "isize");
        assert_eq!(Kind::U16.to_string(), "u16");
        assert_eq!(Kind::Str.to_string(), "String");
        assert_eq!(Kind::Record.to_string(), "record");
    }
}
