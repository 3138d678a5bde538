//! Field descriptors and the population (read) phase

use std::env;
use std::fmt;

use crate::error::Error;
use crate::path::FieldPath;
use crate::value::Value;
use crate::Options;

/// Walk state threaded through [`EnvFields::visit_fields`](crate::EnvFields).
///
/// Carries the structural path accumulated so far, the inherited optional
/// flag, and the unexported-field allowance. Constructed by the
/// [`parse`](crate::parse) family; generated code derives child contexts
/// with [`nested`](Context::nested).
#[derive(Debug, Clone)]
pub struct Context {
    path: FieldPath,
    optional: bool,
    allow_unexported: bool,
}

impl Context {
    pub(crate) fn root(options: &Options) -> Self {
        let mut path = FieldPath::new();
        if !options.prefix.is_empty() {
            path = path.append(&options.prefix);
        }
        Self {
            path,
            optional: options.all_optional,
            allow_unexported: options.allow_unexported,
        }
    }

    #[doc(hidden)]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    #[doc(hidden)]
    pub fn optional(&self) -> bool {
        self.optional
    }

    #[doc(hidden)]
    pub fn allow_unexported(&self) -> bool {
        self.allow_unexported
    }

    /// Child context for descending into a nested struct field.
    #[doc(hidden)]
    pub fn nested(&self, segment: &str, optional: bool) -> Self {
        Self {
            path: self.path.append(segment),
            optional: self.optional || optional,
            allow_unexported: self.allow_unexported,
        }
    }
}

/// Tag metadata for one leaf field, emitted by the derive macro.
#[doc(hidden)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldSpec {
    pub custom_name: Option<&'static str>,
    pub default_value: Option<&'static str>,
    pub note: Option<&'static str>,
    pub optional: bool,
}

/// One leaf configuration field: its structural path, tag metadata, and a
/// write target into the struct being populated.
pub struct Field<'a> {
    path: FieldPath,
    target: &'a mut dyn Value,
    raw_value: String,
    spec: FieldSpec,
}

impl<'a> Field<'a> {
    /// Full dotted structural name, e.g. `Cassandra.SslCert`.
    pub fn name(&self) -> String {
        self.path.to_string()
    }

    /// The raw string this field was populated from.
    ///
    /// Empty until [`ConfInfo::read`] has resolved this field; afterwards it
    /// holds the environment or default value that was used.
    pub fn value(&self) -> &str {
        &self.raw_value
    }

    /// The declared default, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.spec.default_value
    }

    /// The declared note, if any.
    pub fn note(&self) -> Option<&str> {
        self.spec.note
    }

    /// Whether a missing value is tolerated for this field.
    pub fn optional(&self) -> bool {
        self.spec.optional
    }

    /// Every environment key that will be tried when populating this field.
    ///
    /// A custom name override is the sole key; otherwise the keys derived
    /// from the structural path, sorted.
    pub fn keys(&self) -> Vec<String> {
        match self.spec.custom_name {
            Some(name) => vec![name.to_string()],
            None => self.path.keys(),
        }
    }

    /// First non-empty environment value among the keys, else the declared
    /// default, else empty for optional fields.
    fn resolve(&self) -> Result<String, Error> {
        let keys = self.keys();

        for key in &keys {
            if let Ok(value) = env::var(key) {
                if !value.is_empty() {
                    return Ok(value);
                }
            }
        }

        if let Some(default) = self.spec.default_value {
            if !default.is_empty() {
                return Ok(default.to_string());
            }
        }

        if self.spec.optional {
            return Ok(String::new());
        }

        Err(Error::KeysNotFound { keys })
    }

    fn set_value(&mut self) -> Result<(), Error> {
        let raw = self.resolve()?;

        if raw.is_empty() && self.spec.optional {
            return Ok(());
        }

        // recorded before conversion so a failed parse stays inspectable
        self.raw_value = raw;
        self.target.set_from_str(&self.raw_value)
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name())
            .field("keys", &self.keys())
            .field("value", &self.raw_value)
            .field("default", &self.spec.default_value)
            .field("note", &self.spec.note)
            .field("optional", &self.spec.optional)
            .finish()
    }
}

/// The flat list of leaf field descriptors produced by the
/// [`parse`](crate::parse) family, in depth-first declaration order.
///
/// Borrows the configuration struct mutably for its lifetime: [`read`]
/// writes converted values through the descriptors' targets.
///
/// [`read`]: ConfInfo::read
#[derive(Debug, Default)]
pub struct ConfInfo<'a> {
    fields: Vec<Field<'a>>,
}

impl<'a> ConfInfo<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Resolves and converts a value for every descriptor, in order,
    /// stopping at the first failure.
    ///
    /// Fields converted before a failing one keep their new values.
    pub fn read(&mut self) -> Result<(), Error> {
        for field in &mut self.fields {
            field.set_value()?;
        }
        Ok(())
    }

    /// Number of leaf fields discovered.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field<'a>> {
        self.fields.iter()
    }

    /// Appends one leaf descriptor. Called by generated
    /// [`EnvFields`](crate::EnvFields) implementations.
    #[doc(hidden)]
    pub fn register(&mut self, target: &'a mut dyn Value, path: FieldPath, spec: FieldSpec) {
        self.fields.push(Field {
            path,
            target,
            raw_value: String::new(),
            spec,
        });
    }
}

impl<'a, 'b> IntoIterator for &'b ConfInfo<'a> {
    type Item = &'b Field<'a>;
    type IntoIter = std::slice::Iter<'b, Field<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn spec() -> FieldSpec {
        FieldSpec::default()
    }

    fn leaf<'a>(target: &'a mut dyn Value, segment: &str, spec: FieldSpec) -> ConfInfo<'a> {
        let mut info = ConfInfo::new();
        info.register(target, FieldPath::new().append(segment), spec);
        info
    }

    #[test]
    #[serial]
    fn resolves_from_environment() {
        env::set_var("RESOLVE_TARGET", "localhost");

        let mut host = String::new();
        let mut info = leaf(&mut host, "ResolveTarget", spec());
        info.read().unwrap();

        assert_eq!(info.iter().next().unwrap().value(), "localhost");
        drop(info);
        assert_eq!(host, "localhost");

        env::remove_var("RESOLVE_TARGET");
    }

    #[test]
    #[serial]
    fn falls_back_to_default_and_records_it() {
        env::remove_var("RESOLVE_PROTO");
        env::remove_var("RESOLVEPROTO");

        let mut proto = String::new();
        let mut info = leaf(
            &mut proto,
            "ResolveProto",
            FieldSpec {
                default_value: Some("https"),
                ..spec()
            },
        );
        info.read().unwrap();

        assert_eq!(info.iter().next().unwrap().value(), "https");
        drop(info);
        assert_eq!(proto, "https");
    }

    #[test]
    #[serial]
    fn optional_leaves_target_untouched() {
        env::remove_var("RESOLVE_GONE");
        env::remove_var("RESOLVEGONE");

        let mut port: u16 = 7;
        let mut info = leaf(
            &mut port,
            "ResolveGone",
            FieldSpec {
                optional: true,
                ..spec()
            },
        );
        info.read().unwrap();

        assert_eq!(info.iter().next().unwrap().value(), "");
        drop(info);
        assert_eq!(port, 7);
    }

    #[test]
    #[serial]
    fn missing_required_names_every_key() {
        env::remove_var("RESOLVE_MISSING");
        env::remove_var("RESOLVEMISSING");

        let mut host = String::new();
        let mut info = leaf(&mut host, "ResolveMissing", spec());
        let err = info.read().unwrap_err();

        match err {
            Error::KeysNotFound { keys } => assert_eq!(
                keys,
                [
                    "RESOLVEMISSING",
                    "RESOLVE_MISSING",
                    "resolve_missing",
                    "resolvemissing",
                ],
            ),
            other => panic!("expected KeysNotFound, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn empty_environment_value_is_missing() {
        env::set_var("RESOLVE_EMPTY", "");

        let mut host = String::new();
        let mut info = leaf(
            &mut host,
            "ResolveEmpty",
            FieldSpec {
                default_value: Some("fallback"),
                ..spec()
            },
        );
        info.read().unwrap();

        assert_eq!(host, "fallback");
        env::remove_var("RESOLVE_EMPTY");
    }

    #[test]
    #[serial]
    fn custom_name_is_the_only_key() {
        env::remove_var("RESOLVE_CUSTOM");
        env::remove_var("RESOLVECUSTOM");
        env::set_var("PGPORT", "5433");

        let mut port: u16 = 0;
        let mut info = leaf(
            &mut port,
            "ResolveCustom",
            FieldSpec {
                custom_name: Some("PGPORT"),
                ..spec()
            },
        );
        assert_eq!(info.iter().next().unwrap().keys(), ["PGPORT"]);
        info.read().unwrap();

        assert_eq!(port, 5433);
        env::remove_var("PGPORT");
    }
}
