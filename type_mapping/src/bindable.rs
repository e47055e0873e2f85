//! Bindable host values
//!
//! Every value handed to the argument resolver implements [`Bindable`], which
//! reports its runtime type and allows downcasting back to the concrete type.

use std::any::Any;
use std::fmt::Debug;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::temporal::{SqlDate, SqlTimestamp};
use crate::token::TypeToken;
use crate::types::SqlValue;

/// A host value that can be resolved into a statement argument
pub trait Bindable: Any + Debug + Send + Sync {
    /// Static descriptor of the implementing type
    fn type_token() -> TypeToken
    where
        Self: Sized;

    /// Descriptor of the value's concrete runtime type
    fn runtime_type(&self) -> TypeToken;

    fn as_any(&self) -> &dyn Any;

    /// Enumeration view, implemented by [`impl_sql_enum!`](crate::impl_sql_enum)
    fn as_sql_enum(&self) -> Option<&dyn SqlEnum> {
        None
    }

    /// Optional view: `Some(inner)` for `Option<T>` values
    fn as_optional(&self) -> Option<Option<&dyn Bindable>> {
        None
    }
}

/// Enumerations bound through their textual variant name
pub trait SqlEnum {
    fn variant_name(&self) -> &'static str;

    fn ordinal(&self) -> usize;
}

/// Implement [`Bindable`] for plain types matched by exact identity
#[macro_export]
macro_rules! impl_bindable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Bindable for $ty {
                fn type_token() -> $crate::TypeToken {
                    $crate::TypeToken::of::<$ty>()
                }

                fn runtime_type(&self) -> $crate::TypeToken {
                    <$ty as $crate::Bindable>::type_token()
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }
            }
        )*
    };
}

/// Implement [`SqlEnum`] and [`Bindable`] for a fieldless enum
///
/// ```rust
/// use type_mapping::impl_sql_enum;
///
/// #[derive(Debug, Clone, Copy)]
/// enum Status { Active, Archived }
///
/// impl_sql_enum!(Status { Active, Archived });
/// ```
#[macro_export]
macro_rules! impl_sql_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::SqlEnum for $ty {
            fn variant_name(&self) -> &'static str {
                match self {
                    $($ty::$variant => stringify!($variant),)+
                }
            }

            fn ordinal(&self) -> usize {
                const VARIANTS: &[&str] = &[$(stringify!($variant)),+];
                let name = $crate::SqlEnum::variant_name(self);
                VARIANTS.iter().position(|v| *v == name).unwrap_or_default()
            }
        }

        impl $crate::Bindable for $ty {
            fn type_token() -> $crate::TypeToken {
                $crate::TypeToken::enumeration::<$ty>()
            }

            fn runtime_type(&self) -> $crate::TypeToken {
                <$ty as $crate::Bindable>::type_token()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_sql_enum(&self) -> Option<&dyn $crate::SqlEnum> {
                Some(self)
            }
        }
    };
}

impl_bindable!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    char,
    String,
    &'static str,
    Vec<u8>,
    Decimal,
    Uuid,
    serde_json::Value,
    SqlValue,
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    SystemTime,
    SqlDate,
    SqlTimestamp,
    NaiveDate,
    NaiveTime,
    NaiveDateTime,
    DateTime<Utc>,
    DateTime<FixedOffset>,
    DateTime<Local>,
);

impl<T: Bindable> Bindable for Option<T> {
    fn type_token() -> TypeToken {
        TypeToken::optional::<T>()
    }

    fn runtime_type(&self) -> TypeToken {
        <Self as Bindable>::type_token()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_optional(&self) -> Option<Option<&dyn Bindable>> {
        Some(self.as_ref().map(|v| v as &dyn Bindable))
    }
}
