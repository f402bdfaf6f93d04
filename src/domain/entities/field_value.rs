//! Common contract for validated single-string value objects.

use crate::error::AppError;

/// A value object wrapping one string that satisfied a format predicate.
///
/// Implementors expose no unchecked constructor: [`FieldValue::parse`] is the
/// only way to obtain an instance, so every value in memory is valid.
pub trait FieldValue: Sized {
    /// Kind name used in missing-field messages (e.g. `StudentId`).
    const KIND: &'static str;

    /// Message reported when a raw string fails [`FieldValue::is_valid`].
    const MESSAGE_CONSTRAINTS: &'static str;

    /// Returns true if `raw` satisfies this kind's format.
    fn is_valid(raw: &str) -> bool;

    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IllegalValue`] carrying [`FieldValue::MESSAGE_CONSTRAINTS`]
    /// if `raw` is not valid.
    fn parse(raw: &str) -> Result<Self, AppError>;

    /// The underlying raw string.
    fn as_str(&self) -> &str;
}

/// Declares a `String` newtype implementing [`FieldValue`], [`FromStr`] and
/// `AsRef<str>`.
///
/// The tuple field stays private to the declaring module, so
/// [`FieldValue::parse`] remains the only constructor. `Display` is left to
/// each type.
///
/// [`FromStr`]: std::str::FromStr
macro_rules! field_value_type {
    (
        $(#[$meta:meta])*
        $name:ident {
            kind: $kind:literal,
            constraints: $constraints:expr,
            is_valid: $is_valid:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $crate::domain::entities::FieldValue for $name {
            const KIND: &'static str = $kind;
            const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            fn is_valid(raw: &str) -> bool {
                let is_valid: fn(&str) -> bool = $is_valid;
                is_valid(raw)
            }

            fn parse(raw: &str) -> Result<Self, $crate::error::AppError> {
                if !Self::is_valid(raw) {
                    return Err($crate::error::AppError::invalid_field(
                        Self::KIND,
                        Self::MESSAGE_CONSTRAINTS,
                    ));
                }
                Ok(Self(raw.to_owned()))
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::domain::entities::FieldValue>::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

pub(crate) use field_value_type;
