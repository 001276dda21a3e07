use crate::error::MarshalError;
use crate::kind::Kind;
use crate::record::Record;
use crate::reflect::Reflect;
use crate::value::Mapping;

/// Record reached through a pointer.
///
/// Behind a shared pointer every field is validated but none is settable.
enum Target<'a> {
    Settable(&'a mut dyn Record),
    ReadOnly(&'a dyn Record),
}

impl Target<'_> {
    fn record(&self) -> &dyn Record {
        match self {
            Target::Settable(record) => &**record,
            Target::ReadOnly(record) => *record,
        }
    }
}

/// Write mapping values into the record `target` points at.
///
/// `target` must be a pointer (`&mut T`, `Box<T>`, or a shared pointer for a
/// dry run) to a record. Each entry is handled independently:
///
/// 1. A key with no field of that name is skipped.
/// 2. A value whose type differs from the field type fails the call with
///    `FieldTypeMismatch`. No coercion between widths or signedness.
/// 3. A field of a composite kind fails the call with `UnsupportedFieldKind`.
/// 4. A field that is private, or reached through a shared pointer, is skipped.
/// 5. Otherwise the value is moved into the field.
///
/// Entries assigned before a failing entry stay assigned. Mapping iteration
/// order is unspecified, so when several entries are invalid the reported
/// error may differ between calls.
///
/// Errors:
/// - `NotAPointer` if `target` is not a pointer.
/// - `NotARecord` if the pointee is not a record.
pub fn populate<P: Reflect>(mut target: P, values: Mapping) -> Result<(), MarshalError> {
    if target.kind() != Kind::Pointer {
        return Err(MarshalError::NotAPointer);
    }

    if let Some(pointee) = target.pointee_mut() {
        let record = pointee.as_record_mut().ok_or(MarshalError::NotARecord)?;
        return apply(Target::Settable(record), values);
    }

    let record = target
        .pointee()
        .and_then(|pointee| pointee.as_record())
        .ok_or(MarshalError::NotARecord)?;
    apply(Target::ReadOnly(record), values)
}

/// Same as [`populate`] for a record already viewed as a mutable trait object.
pub fn populate_record(record: &mut dyn Record, values: Mapping) -> Result<(), MarshalError> {
    apply(Target::Settable(record), values)
}

fn apply(mut target: Target<'_>, values: Mapping) -> Result<(), MarshalError> {
    for (key, value) in values {
        let record = target.record();
        let type_name = record.type_name();
        let Some(index) = record.field_index(&key) else {
            tracing::trace!(record = type_name, key = %key, "no such field, skipping");
            continue;
        };
        let info = record.fields()[index];

        if info.kind != value.kind() {
            tracing::debug!(
                record = type_name,
                field = info.name,
                expected = %info.kind,
                actual = %value.kind(),
                "field type mismatch"
            );
            return Err(MarshalError::FieldTypeMismatch);
        }

        if !info.kind.is_allowed() {
            return Err(MarshalError::UnsupportedFieldKind);
        }

        let Target::Settable(record) = &mut target else {
            tracing::trace!(record = type_name, field = info.name, "read-only target, skipping");
            continue;
        };

        if !info.exported {
            tracing::trace!(record = type_name, field = info.name, "skipping private field");
            continue;
        }

        record
            .set_field(index, value)
            .map_err(|_| MarshalError::FieldTypeMismatch)?;
    }

    Ok(())
}
