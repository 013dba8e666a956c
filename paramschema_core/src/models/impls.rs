use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::Arc;

use super::{FloatWidth, IntWidth, Kind, Reflect, TypeInfo, TypeRef};

macro_rules! prim {
    ($($ty:ty => $kind:expr),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<Self>($kind)
                }
            }
        )+
    };
}

prim! {
    bool => Kind::Bool,
    i8 => Kind::Int(IntWidth::W8),
    i16 => Kind::Int(IntWidth::W16),
    i32 => Kind::Int(IntWidth::W32),
    i64 => Kind::Int(IntWidth::W64),
    i128 => Kind::Int(IntWidth::W128),
    isize => Kind::Int(IntWidth::Size),
    u8 => Kind::Uint(IntWidth::W8),
    u16 => Kind::Uint(IntWidth::W16),
    u32 => Kind::Uint(IntWidth::W32),
    u64 => Kind::Uint(IntWidth::W64),
    u128 => Kind::Uint(IntWidth::W128),
    usize => Kind::Uint(IntWidth::Size),
    f32 => Kind::Float(FloatWidth::F32),
    f64 => Kind::Float(FloatWidth::F64),
    char => Kind::Char,
    str => Kind::Str,
    String => Kind::Str,
    () => Kind::Unit,
    serde_json::Value => Kind::Dynamic,
    dyn Any => Kind::Dynamic,
    dyn Any + Send => Kind::Dynamic,
    dyn Any + Send + Sync => Kind::Dynamic,
}

// Sequences

macro_rules! seq {
    ($($container:ident),+) => {
        $(
            impl<T: Reflect> Reflect for $container<T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<Self>(Kind::Seq(T::type_info))
                }
            }
        )+
    };
}

seq!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: Reflect, S> Reflect for HashSet<T, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Seq(T::type_info))
    }
}

impl<T: Reflect> Reflect for [T] {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Seq(T::type_info))
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Array(T::type_info, N))
    }
}

// Indirection

macro_rules! indirect {
    ($($wrapper:ident),+) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $wrapper<T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<Self>(Kind::Indirect(T::type_info))
                }
            }
        )+
    };
}

indirect!(Box, Rc, Arc);

impl<T: Reflect> Reflect for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Indirect(T::type_info))
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Indirect(T::type_info))
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Indirect(T::type_info))
    }
}

impl<T: Reflect + ToOwned + ?Sized> Reflect for Cow<'_, T> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Indirect(T::type_info))
    }
}

// Kinds with no JSON representation. They still describe themselves so the
// reflector can name them when it rejects them.

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Map(K::type_info, V::type_info))
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Map(K::type_info, V::type_info))
    }
}

impl<T: ?Sized> Reflect for *const T {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::RawPointer)
    }
}

impl<T: ?Sized> Reflect for *mut T {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::RawPointer)
    }
}

macro_rules! channel {
    ($($chan:ident),+) => {
        $(
            impl<T> Reflect for $chan<T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<Self>(Kind::Channel)
                }
            }
        )+
    };
}

channel!(Sender, SyncSender, Receiver);

macro_rules! function {
    ($(($($arg:ident),*))+) => {
        $(
            impl<R, $($arg),*> Reflect for fn($($arg),*) -> R {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<Self>(Kind::Function)
                }
            }
        )+
    };
}

function! {
    ()
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
}

macro_rules! tuple {
    ($(($($name:ident),+))+) => {
        $(
            impl<$($name: Reflect),+> Reflect for ($($name,)+) {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<Self>(Kind::Tuple(vec![$($name::type_info as TypeRef),+]))
                }
            }
        )+
    };
}

tuple! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_kinds() {
        assert!(matches!(bool::type_info().kind, Kind::Bool));
        assert!(matches!(i64::type_info().kind, Kind::Int(IntWidth::W64)));
        assert!(matches!(usize::type_info().kind, Kind::Uint(IntWidth::Size)));
        assert!(matches!(f32::type_info().kind, Kind::Float(FloatWidth::F32)));
        assert!(matches!(<str>::type_info().kind, Kind::Str));
        assert!(matches!(<()>::type_info().kind, Kind::Unit));
    }

    #[test]
    fn test_fixed_array_keeps_length() {
        let info = <[u8; 4]>::type_info();
        match info.kind {
            Kind::Array(elem, len) => {
                assert_eq!(len, 4);
                assert!(matches!(elem().kind, Kind::Uint(IntWidth::W8)));
            }
            other => panic!("expected array, got {}", other.name()),
        }
    }

    #[test]
    fn test_wrappers_are_indirect() {
        for info in [
            <Option<String>>::type_info(),
            <Box<String>>::type_info(),
            <Arc<str>>::type_info(),
            <&'static str>::type_info(),
            <Cow<'static, str>>::type_info(),
        ] {
            match info.kind {
                Kind::Indirect(pointee) => assert!(matches!(pointee().kind, Kind::Str)),
                other => panic!("{} should be indirect, got {}", info.name, other.name()),
            }
        }
    }

    #[test]
    fn test_unrepresentable_kinds() {
        assert!(matches!(<HashMap<String, i32>>::type_info().kind, Kind::Map(..)));
        assert!(matches!(<BTreeMap<String, i32>>::type_info().kind, Kind::Map(..)));
        assert!(matches!(<*const u8>::type_info().kind, Kind::RawPointer));
        assert!(matches!(<Sender<u8>>::type_info().kind, Kind::Channel));
        assert!(matches!(<fn(i32) -> i32>::type_info().kind, Kind::Function));
        assert!(matches!(<serde_json::Value>::type_info().kind, Kind::Dynamic));
        assert!(matches!(<Box<dyn Any>>::type_info().kind, Kind::Indirect(_)));
    }

    #[test]
    fn test_tuple_elements() {
        match <(i32, String)>::type_info().kind {
            Kind::Tuple(elems) => assert_eq!(elems.len(), 2),
            other => panic!("expected tuple, got {}", other.name()),
        }
    }
}
