//! Value conversion: from raw environment strings into field types

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use base64::Engine as _;

use crate::error::Error;
use crate::tokenizer::SliceTokenizer;

/// A type that can parse itself from an environment variable string.
///
/// This is the conversion capability behind every leaf field. The crate
/// provides implementations for booleans, integers of every width, floats,
/// `String`, [`Duration`] (duration syntax such as `1h 30m`), `Vec<u8>`
/// (standard base64), `Vec<T>` (comma-separated tokens), `Option<T>` and
/// `Box<T>` (allocate and recurse), and `#[derive(EnvFields)]` structs
/// (parenthesized comma-joined tokens). Implement it on your own types to
/// take full control of their parsing:
///
/// ```
/// use envfields::{Error, Unmarshal};
///
/// struct LogLevel(u8);
///
/// impl Unmarshal for LogLevel {
///     fn unmarshal(s: &str) -> Result<Self, Error> {
///         match s {
///             "debug" => Ok(LogLevel(0)),
///             "info" => Ok(LogLevel(1)),
///             "error" => Ok(LogLevel(2)),
///             other => Err(Error::parse_error::<LogLevel>(other, "unknown log level")),
///         }
///     }
/// }
/// ```
pub trait Unmarshal: Sized {
    /// Parse a value of this type from `s`.
    fn unmarshal(s: &str) -> Result<Self, Error>;

    /// How `Vec<Self>` parses. The default tokenizes `s` on top-level commas
    /// and converts each token; `u8` overrides this so `Vec<u8>` decodes
    /// base64 instead of splitting.
    #[doc(hidden)]
    fn unmarshal_seq(s: &str) -> Result<Vec<Self>, Error> {
        SliceTokenizer::new(s).map(Self::unmarshal).collect()
    }
}

/// A write target for one leaf field.
///
/// Object-safe so a [`Field`](crate::Field) can hold `&mut dyn Value`
/// regardless of the concrete field type. Blanket-implemented for every
/// [`Unmarshal`] type; there is no reason to implement it directly.
pub trait Value {
    /// Convert `s` and store the result in place.
    fn set_from_str(&mut self, s: &str) -> Result<(), Error>;
}

impl<T: Unmarshal> Value for T {
    fn set_from_str(&mut self, s: &str) -> Result<(), Error> {
        *self = T::unmarshal(s)?;
        Ok(())
    }
}

impl Unmarshal for String {
    fn unmarshal(s: &str) -> Result<Self, Error> {
        Ok(s.to_owned())
    }
}

macro_rules! unmarshal_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Unmarshal for $ty {
                fn unmarshal(s: &str) -> Result<Self, Error> {
                    s.parse().map_err(|e| Error::parse_error::<$ty>(s, e))
                }
            }
        )*
    };
}

unmarshal_from_str!(
    bool, i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, f32, f64,
);

impl Unmarshal for u8 {
    fn unmarshal(s: &str) -> Result<Self, Error> {
        s.parse().map_err(|e| Error::parse_error::<u8>(s, e))
    }

    // Vec<u8> is a byte buffer, not a list of numbers
    fn unmarshal_seq(s: &str) -> Result<Vec<u8>, Error> {
        base64::engine::general_purpose::STANDARD
            .decode(s)
            .map_err(|e| Error::parse_error::<Vec<u8>>(s, e))
    }
}

impl Unmarshal for Duration {
    fn unmarshal(s: &str) -> Result<Self, Error> {
        humantime::parse_duration(s).map_err(|e| Error::parse_error::<Duration>(s, e))
    }
}

impl<T: Unmarshal> Unmarshal for Vec<T> {
    fn unmarshal(s: &str) -> Result<Self, Error> {
        T::unmarshal_seq(s)
    }
}

impl<T: Unmarshal> Unmarshal for Option<T> {
    fn unmarshal(s: &str) -> Result<Self, Error> {
        Ok(Some(T::unmarshal(s)?))
    }
}

impl<T: Unmarshal> Unmarshal for Box<T> {
    fn unmarshal(s: &str) -> Result<Self, Error> {
        Ok(Box::new(T::unmarshal(s)?))
    }
}

// Maps have no environment syntax. The impls exist so the failure is the
// uniform UnsupportedKind error rather than a missing-trait compile error.
impl<K, V, S> Unmarshal for HashMap<K, V, S> {
    fn unmarshal(_s: &str) -> Result<Self, Error> {
        Err(Error::UnsupportedKind {
            kind: std::any::type_name::<Self>(),
        })
    }
}

impl<K, V> Unmarshal for BTreeMap<K, V> {
    fn unmarshal(_s: &str) -> Result<Self, Error> {
        Err(Error::UnsupportedKind {
            kind: std::any::type_name::<Self>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_round_trip() {
        assert_eq!(u16::unmarshal("443").unwrap(), 443);
        assert_eq!(u16::unmarshal("443").unwrap().to_string(), "443");
        assert_eq!(i64::unmarshal("-12").unwrap(), -12);
        assert_eq!(f64::unmarshal("2.5").unwrap(), 2.5);
        assert!(bool::unmarshal("true").unwrap());
        assert_eq!(String::unmarshal("https").unwrap(), "https");
    }

    #[test]
    fn numeric_parse_failure_keeps_offending_string() {
        let err = u32::unmarshal("eighty").unwrap_err();
        assert_eq!(err.offending_value(), Some("eighty"));
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn duration_syntax() {
        assert_eq!(
            Duration::unmarshal("1h 30m").unwrap(),
            Duration::from_secs(90 * 60),
        );
        assert_eq!(Duration::unmarshal("250ms").unwrap(), Duration::from_millis(250));
        assert!(Duration::unmarshal("later").is_err());
    }

    #[test]
    fn byte_vec_decodes_base64() {
        assert_eq!(Vec::<u8>::unmarshal("aGVsbG8=").unwrap(), b"hello");
        assert!(Vec::<u8>::unmarshal("not base64!").is_err());
    }

    #[test]
    fn vec_splits_on_commas() {
        assert_eq!(
            Vec::<String>::unmarshal("a,b,c").unwrap(),
            ["a", "b", "c"],
        );
        assert_eq!(Vec::<u16>::unmarshal("1,2,3").unwrap(), [1, 2, 3]);
    }

    #[test]
    fn vec_element_failure_propagates() {
        let err = Vec::<u16>::unmarshal("1,x,3").unwrap_err();
        assert_eq!(err.offending_value(), Some("x"));
    }

    #[test]
    fn vec_of_byte_vecs_decodes_each_token() {
        assert_eq!(
            Vec::<Vec<u8>>::unmarshal("aGk=,eW8=").unwrap(),
            [b"hi".to_vec(), b"yo".to_vec()],
        );
    }

    #[test]
    fn option_and_box_allocate() {
        assert_eq!(Option::<u16>::unmarshal("8080").unwrap(), Some(8080));
        assert_eq!(*Box::<u16>::unmarshal("8080").unwrap(), 8080);
    }

    #[test]
    fn maps_are_unsupported() {
        let err = HashMap::<String, String>::unmarshal("a=b").unwrap_err();
        assert!(matches!(err, Error::UnsupportedKind { .. }));
        let err = BTreeMap::<String, u32>::unmarshal("a=1").unwrap_err();
        assert!(matches!(err, Error::UnsupportedKind { .. }));
    }

    #[test]
    fn set_from_str_writes_in_place() {
        let mut port: u16 = 0;
        let target: &mut dyn Value = &mut port;
        target.set_from_str("443").unwrap();
        assert_eq!(port, 443);
    }
}
