//! Error types for environment variable configuration

/// Errors that can occur while discovering fields or populating them from
/// environment variables.
///
/// This error type covers the main failure scenarios:
/// - A non-`pub` field present without the `allow_unexported` option
/// - No environment value, no default, and the field is not optional
/// - A composite token whose part count disagrees with the target struct
/// - A value that cannot be converted into the field's type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A struct field is not `pub` and the `allow_unexported` option is off.
    ///
    /// With `allow_unexported` set, such fields are silently skipped instead.
    #[error("unexported field '{field}'")]
    UnexportedField {
        /// Name of the offending field
        field: &'static str,
    },

    /// None of the candidate environment keys held a non-empty value, no
    /// default was declared, and the field is not optional.
    #[error("keys {} not found", .keys.join(", "))]
    KeysNotFound {
        /// Every key that was tried, in lookup order
        keys: Vec<String>,
    },

    /// A parenthesized struct token does not have one part per field.
    ///
    /// Raised when converting tokens such as `(localhost,80)` into a struct
    /// whose populatable field count differs from the token's part count.
    #[error("struct token has {got} fields but struct has {want}")]
    StructTokenMismatch {
        /// Number of comma-separated parts in the token
        got: usize,
        /// Number of fields the target struct expects
        want: usize,
    },

    /// No conversion rule exists for the target type.
    #[error("kind {kind} not supported")]
    UnsupportedKind {
        /// Fully qualified name of the unsupported type
        kind: &'static str,
    },

    /// A value was found but could not be converted into the field's type.
    ///
    /// Wraps the underlying parser error (numeric, boolean, duration,
    /// base64, or a custom [`Unmarshal`](crate::Unmarshal) failure) and keeps
    /// the offending string retrievable.
    #[error("failed to parse '{value}' as {type_name}: {source}")]
    Parse {
        /// The string that failed to convert
        value: String,
        /// Fully qualified name of the target type
        type_name: &'static str,
        /// Underlying parser error
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create a conversion error for type `T`, keeping the offending string.
    ///
    /// [`Unmarshal`](crate::Unmarshal) implementations use this to wrap the
    /// errors of whatever parser they delegate to.
    pub fn parse_error<T>(
        value: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Parse {
            value: value.into(),
            type_name: std::any::type_name::<T>(),
            source: source.into(),
        }
    }

    /// The string that failed to convert, if this is a conversion error.
    pub fn offending_value(&self) -> Option<&str> {
        match self {
            Self::Parse { value, .. } => Some(value),
            _ => None,
        }
    }
}
