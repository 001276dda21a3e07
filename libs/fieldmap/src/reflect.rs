use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::kind::Kind;
use crate::record::Record;
use crate::value::Value;

/// Runtime view of an arbitrary value.
///
/// Entry point of `flatten`/`populate`: lets them tell records from scalars
/// and pointers without knowing the concrete type.
///
/// - Records answer `as_record()`/`as_record_mut()`.
/// - Pointers answer `pointee()`; only exclusive pointers (`&mut T`, `Box<T>`)
///   answer `pointee_mut()`, so fields behind `&T`, `Rc` and `Arc` are never
///   settable.
pub trait Reflect {
    fn kind(&self) -> Kind;

    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }

    fn pointee(&self) -> Option<&dyn Reflect> {
        None
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        None
    }
}

/// Static type information for record fields.
///
/// Every field type of a derived record implements this. Scalars convert to
/// and from `Value`; composite types keep the defaults and are reported with
/// their kind only.
pub trait Typed: Reflect {
    const KIND: Kind;

    fn to_value(&self) -> Option<Value> {
        None
    }

    /// Exact variant match, no coercion between widths or signedness.
    fn from_value(value: Value) -> Result<Self, Value>
    where
        Self: Sized,
    {
        Err(value)
    }
}

macro_rules! scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn kind(&self) -> Kind {
                    Kind::$variant
                }
            }

            impl Typed for $ty {
                const KIND: Kind = Kind::$variant;

                fn to_value(&self) -> Option<Value> {
                    Some(Value::$variant(Clone::clone(self)))
                }

                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

scalar! {
    bool => Bool,
    isize => Int,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    usize => Uint,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
}

impl Reflect for str {
    fn kind(&self) -> Kind {
        Kind::Str
    }
}

macro_rules! unsupported {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn kind(&self) -> Kind {
                    Kind::$variant
                }
            }

            impl Typed for $ty {
                const KIND: Kind = Kind::$variant;
            }
        )*
    };
}

unsupported! {
    char => Other,
    i128 => Other,
    u128 => Other,
    () => Tuple,
}

// ---------------------------------------------------------------------------
// Pointers
// ---------------------------------------------------------------------------

impl<T: Reflect> Reflect for &T {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }
}

impl<T: Reflect> Typed for &T {
    const KIND: Kind = Kind::Pointer;
}

impl<T: Reflect> Reflect for &mut T {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }
}

impl<T: Reflect> Typed for &mut T {
    const KIND: Kind = Kind::Pointer;
}

impl<T: Reflect> Reflect for Box<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }
}

impl<T: Reflect> Typed for Box<T> {
    const KIND: Kind = Kind::Pointer;
}

impl<T: Reflect> Reflect for Rc<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }
}

impl<T: Reflect> Typed for Rc<T> {
    const KIND: Kind = Kind::Pointer;
}

impl<T: Reflect> Reflect for Arc<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }
}

impl<T: Reflect> Typed for Arc<T> {
    const KIND: Kind = Kind::Pointer;
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

impl<T> Reflect for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Optional
    }
}

impl<T> Typed for Option<T> {
    const KIND: Kind = Kind::Optional;
}

impl<T> Reflect for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

impl<T> Typed for Vec<T> {
    const KIND: Kind = Kind::Sequence;
}

impl<T> Reflect for VecDeque<T> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

impl<T> Typed for VecDeque<T> {
    const KIND: Kind = Kind::Sequence;
}

impl<T, const N: usize> Reflect for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

impl<T, const N: usize> Typed for [T; N] {
    const KIND: Kind = Kind::Sequence;
}

impl<T, S> Reflect for HashSet<T, S> {
    fn kind(&self) -> Kind {
        Kind::Set
    }
}

impl<T, S> Typed for HashSet<T, S> {
    const KIND: Kind = Kind::Set;
}

impl<T> Reflect for BTreeSet<T> {
    fn kind(&self) -> Kind {
        Kind::Set
    }
}

impl<T> Typed for BTreeSet<T> {
    const KIND: Kind = Kind::Set;
}

impl<K, V, S> Reflect for HashMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl<K, V, S> Typed for HashMap<K, V, S> {
    const KIND: Kind = Kind::Map;
}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl<K, V> Typed for BTreeMap<K, V> {
    const KIND: Kind = Kind::Map;
}

macro_rules! tuple {
    ($($name:ident)+) => {
        impl<$($name),+> Reflect for ($($name,)+) {
            fn kind(&self) -> Kind {
                Kind::Tuple
            }
        }

        impl<$($name),+> Typed for ($($name,)+) {
            const KIND: Kind = Kind::Tuple;
        }
    };
}

tuple!(A);
tuple!(A B);
tuple!(A B C);
tuple!(A B C D);
tuple!(A B C D E);
tuple!(A B C D E F);
tuple!(A B C D E F G);
tuple!(A B C D E F G H);
tuple!(A B C D E F G H I);
tuple!(A B C D E F G H I J);
tuple!(A B C D E F G H I J K);
tuple!(A B C D E F G H I J K L);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_round_trips_through_value() {
        let v = 42u16.to_value().unwrap();
        assert_eq!(v, Value::U16(42));
        assert_eq!(u16::from_value(v), Ok(42));
    }

    #[test]
    fn scalar_rejects_other_width() {
        assert_eq!(i32::from_value(Value::I64(1)), Err(Value::I64(1)));
        assert_eq!(u32::from_value(Value::I32(1)), Err(Value::I32(1)));
        assert_eq!(f64::from_value(Value::F32(1.0)), Err(Value::F32(1.0)));
    }

    #[test]
    fn composite_types_have_no_value() {
        assert_eq!(Some(3i32).to_value(), None);
        assert_eq!(vec![1u8].to_value(), None);
        assert_eq!(Box::new(1u8).to_value(), None);
        assert_eq!('a'.to_value(), None);
        assert_eq!((1u8, 2u8).to_value(), None);
        assert_eq!(
            Vec::<u8>::from_value(Value::U8(1)),
            Err(Value::U8(1))
        );
    }

    #[test]
    fn kinds_of_std_types() {
        assert_eq!(<Option<i32> as Typed>::KIND, Kind::Optional);
        assert_eq!(<[u8; 4] as Typed>::KIND, Kind::Sequence);
        assert_eq!(<HashMap<String, i32> as Typed>::KIND, Kind::Map);
        assert_eq!(<Arc<String> as Typed>::KIND, Kind::Pointer);
        assert_eq!(<HashSet<u8> as Typed>::KIND, Kind::Set);
        assert_eq!(<(u8, String) as Typed>::KIND, Kind::Tuple);
        assert_eq!(<() as Typed>::KIND, Kind::Tuple);
        assert_eq!(<char as Typed>::KIND, Kind::Other);
        assert_eq!(<u128 as Typed>::KIND, Kind::Other);
        assert_eq!("text".kind(), Kind::Str);
    }

    #[test]
    fn only_exclusive_pointers_are_mutable() {
        let mut n = 5i32;
        let shared = &n;
        assert_eq!(Reflect::pointee(&shared).map(|p| p.kind()), Some(Kind::I32));

        let mut exclusive = &mut n;
        assert!(Reflect::pointee_mut(&mut exclusive).is_some());

        let mut boxed = Box::new(5i32);
        assert!(Reflect::pointee_mut(&mut boxed).is_some());

        let mut rc = Rc::new(5i32);
        assert!(Reflect::pointee(&rc).is_some());
        assert!(Reflect::pointee_mut(&mut rc).is_none());
    }
}
