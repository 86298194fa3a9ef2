//! # Closed Value Sets
//!
//! Card data is full of string enumerations whose membership differs between
//! data sources: Rush Duel has no DIVINE attribute, the OCG/TCG legacy
//! schema has no Forbidden speed regulation, and so on. Every such set is a
//! Rust enum implementing [`ClosedValueSet`], declared with
//! [`closed_value_set!`](crate::closed_value_set) so that the wire strings,
//! the serde representation, and the JSON Schema `enum` list come from the
//! same declaration.

/// A closed enumeration of string values.
pub trait ClosedValueSet: Copy + Sized + 'static {
    /// Name of the set, used in error messages.
    const NAME: &'static str;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// The wire string of this member.
    fn as_str(&self) -> &'static str;

    /// The wire strings of every member, in declaration order.
    fn values() -> Vec<&'static str> {
        Self::all().iter().map(Self::as_str).collect()
    }

    /// Look up a member by its wire string.
    fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|member| member.as_str() == value)
    }
}

/// Declare a closed string enumeration.
///
/// Generates the enum with serde renames, a [`ClosedValueSet`] impl,
/// `Display`, and a `FromStr` that rejects non-members with
/// [`YgoError::UnknownValue`](crate::YgoError::UnknownValue).
///
/// The invoking crate must depend on `serde` with the `derive` feature.
///
/// ```
/// ygo_core::closed_value_set! {
///     /// Trap card properties.
///     pub enum TrapType {
///         Normal => "Normal",
///         Continuous => "Continuous",
///         Counter => "Counter",
///     }
/// }
///
/// use ygo_core::ClosedValueSet;
/// assert_eq!(TrapType::values(), ["Normal", "Continuous", "Counter"]);
/// assert_eq!("Counter".parse::<TrapType>().unwrap(), TrapType::Counter);
/// ```
#[macro_export]
macro_rules! closed_value_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $crate::ClosedValueSet for $name {
            const NAME: &'static str = stringify!($name);

            fn all() -> &'static [Self] {
                &[ $( Self::$variant ),+ ]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::ClosedValueSet::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::YgoError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::ClosedValueSet>::parse(s).ok_or_else(|| {
                    $crate::YgoError::UnknownValue {
                        set: <Self as $crate::ClosedValueSet>::NAME,
                        value: s.to_string(),
                    }
                })
            }
        }
    };
}
