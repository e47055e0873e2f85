//! Host type descriptors
//!
//! A [`TypeToken`] names the statically expected type of a value being bound.
//! Identity is the Rust `TypeId`; the kind only steers which resolver may
//! claim the type.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::bindable::Bindable;

/// Classification of a host type for argument resolution
#[derive(Clone, Copy)]
pub enum TypeKind {
    /// Erased placeholder, replaced by the runtime type of a non-null value
    Open,
    /// Any concrete type, matched by exact identity
    Plain,
    /// Enumeration bound through its variant name or ordinal
    Enum,
    /// `Option<T>`, carrying the descriptor of `T`
    Optional(fn() -> TypeToken),
}

impl fmt::Debug for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Open => f.write_str("Open"),
            TypeKind::Plain => f.write_str("Plain"),
            TypeKind::Enum => f.write_str("Enum"),
            TypeKind::Optional(inner) => write!(f, "Optional({})", inner().name()),
        }
    }
}

/// Expected type descriptor
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
    kind: TypeKind,
}

impl TypeToken {
    /// Descriptor of a concrete type
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            kind: TypeKind::Plain,
        }
    }

    /// The erased "any" placeholder
    pub fn open() -> Self {
        Self {
            id: TypeId::of::<dyn Any>(),
            name: "any",
            kind: TypeKind::Open,
        }
    }

    /// Descriptor of an enumeration type
    pub fn enumeration<T: 'static>() -> Self {
        Self {
            kind: TypeKind::Enum,
            ..Self::of::<T>()
        }
    }

    /// Descriptor of `Option<T>`
    pub fn optional<T: Bindable>() -> Self {
        Self {
            kind: TypeKind::Optional(T::type_token),
            ..Self::of::<Option<T>>()
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        matches!(self.kind, TypeKind::Open)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum)
    }

    /// Descriptor of the wrapped type when this is an `Option<T>`
    pub fn optional_inner(&self) -> Option<TypeToken> {
        match self.kind {
            TypeKind::Optional(inner) => Some(inner()),
            _ => None,
        }
    }

    /// True when this descriptor names exactly `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeToken")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
