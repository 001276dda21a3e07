use crate::error::MarshalError;
use crate::record::Record;
use crate::reflect::Reflect;
use crate::value::Mapping;

/// Read the exported fields of a record into a mapping.
///
/// Fields are visited in declaration order. A field of a kind outside
/// `ALLOWED_KINDS` fails the whole call and no partial mapping is returned;
/// this check runs before the visibility check, so a private composite field
/// fails the call as well. Private scalar fields are left out.
///
/// Errors:
/// - `NotARecord` if `value` is not a record (scalars, strings, pointers).
/// - `UnsupportedFieldKind` if any field has a composite kind.
pub fn flatten<T: Reflect + ?Sized>(value: &T) -> Result<Mapping, MarshalError> {
    let record = value.as_record().ok_or(MarshalError::NotARecord)?;
    flatten_record(record)
}

/// Same as [`flatten`] for a record already viewed as a trait object.
pub fn flatten_record(record: &dyn Record) -> Result<Mapping, MarshalError> {
    let fields = record.fields();
    let mut mapping = Mapping::with_capacity(fields.len());

    for (index, info) in fields.iter().enumerate() {
        if !info.kind.is_allowed() {
            tracing::debug!(
                record = record.type_name(),
                field = info.name,
                kind = %info.kind,
                "unsupported field kind"
            );
            return Err(MarshalError::UnsupportedFieldKind);
        }

        if !info.exported {
            tracing::trace!(
                record = record.type_name(),
                field = info.name,
                "skipping private field"
            );
            continue;
        }

        let value = record
            .field(index)
            .ok_or(MarshalError::UnsupportedFieldKind)?;
        mapping.insert(info.name.to_string(), value);
    }

    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use crate::Record;

    #[derive(Record, Default)]
    struct Sample {
        pub name: String,
        pub age: isize,
        pub average_mark: f32,
        comment: String,
    }

    #[derive(Record, Default)]
    struct Inner {
        pub id: u32,
    }

    #[derive(Record, Default)]
    struct Outer {
        pub label: String,
        pub inner: Inner,
    }

    #[derive(Record, Default)]
    struct HiddenNested {
        pub label: String,
        inner: Inner,
    }

    #[derive(Record, Default)]
    struct Empty {}

    fn sample() -> Sample {
        Sample {
            name: "Alice".into(),
            age: 20,
            average_mark: 4.8,
            comment: "hidden".into(),
        }
    }

    #[test]
    fn flattens_exported_fields() {
        let mapping = flatten(&sample()).unwrap();

        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get("name"), Some(&Value::Str("Alice".into())));
        assert_eq!(mapping.get("age"), Some(&Value::Int(20)));
        assert_eq!(mapping.get("average_mark"), Some(&Value::F32(4.8)));
    }

    #[test]
    fn private_fields_are_left_out() {
        let s = sample();
        assert_eq!(s.comment, "hidden");

        let mapping = flatten(&s).unwrap();
        assert!(!mapping.contains_key("comment"));
    }

    #[test]
    fn rejects_non_records() {
        assert_eq!(flatten(&42), Err(MarshalError::NotARecord));
        assert_eq!(flatten("str"), Err(MarshalError::NotARecord));
        assert_eq!(flatten(&String::from("str")), Err(MarshalError::NotARecord));
        assert_eq!(flatten(&vec![1, 2, 3]), Err(MarshalError::NotARecord));
    }

    #[test]
    fn rejects_pointer_to_record() {
        let s = sample();
        let r = &s;
        assert_eq!(flatten(&r), Err(MarshalError::NotARecord));
        assert_eq!(flatten(&Box::new(sample())), Err(MarshalError::NotARecord));
    }

    #[test]
    fn nested_record_fails_whole_call() {
        let outer = Outer {
            label: "x".into(),
            inner: Inner { id: 1 },
        };
        assert_eq!(flatten(&outer), Err(MarshalError::UnsupportedFieldKind));
    }

    #[test]
    fn private_nested_record_still_fails() {
        let record = HiddenNested::default();
        assert_eq!(record.inner.id, 0);
        assert_eq!(flatten(&record), Err(MarshalError::UnsupportedFieldKind));
    }

    #[test]
    fn empty_record_gives_empty_mapping() {
        assert!(flatten(&Empty {}).unwrap().is_empty());
    }

    #[test]
    fn flatten_record_accepts_trait_object() {
        let s = sample();
        let record: &dyn Record = &s;
        assert_eq!(flatten_record(record).unwrap().len(), 3);
    }
}
