/// Failure of `flatten` or `populate`.
///
/// Unit variants only, so callers branch with `==` or `match` on the kind of
/// failure without looking at messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MarshalError {
    /// `flatten` got something other than a record, or the pointer passed to
    /// `populate` does not point at a record.
    #[error("argument is not a struct")]
    NotARecord,

    /// `populate` got a value instead of a pointer to a record.
    #[error("argument is not pointer to struct")]
    NotAPointer,

    /// A field kind is outside `ALLOWED_KINDS`.
    #[error("field of unsupported kind present")]
    UnsupportedFieldKind,

    /// The mapping value type differs from the declared field type.
    #[error("field type not match value type")]
    FieldTypeMismatch,
}
