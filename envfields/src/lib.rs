//! Environment variable-based configuration loading
//!
//! This library populates nested configuration structs from environment
//! variables. Every field's structural path is expanded into the key
//! spellings a user might plausibly set (`RemoteHost` is found under
//! `REMOTE_HOST`, `REMOTEHOST`, `remote_host`, or `remotehost`), values are
//! converted into the field's declared type, and a missing required value is
//! a clear error naming every key that was tried.
//!
//! # Features
//!
//! - **Declarative**: automatic implementation with `#[derive(EnvFields)]`
//! - **Forgiving key lookup**: every plausible spelling of a field's path
//! - **Nested structs**: paths accumulate across levels (`CASSANDRA_SSL_CERT`)
//! - **Typed conversion**: primitives, durations, base64 byte buffers,
//!   comma-separated sequences, and custom [`Unmarshal`] types
//! - **Two phases**: discover field metadata with [`parse`], then populate
//!   with [`ConfInfo::read`] — or do both at once with [`init`]
//! - **Documentation output**: render the discovered fields as a text or
//!   HTML table with the [`docs`] module
//!
//! # Example
//!
//! ```rust
//! use envfields::EnvFields;
//!
//! #[derive(Debug, Default, EnvFields)]
//! struct Config {
//!     #[env("default=https,note=Protocol to be used")]
//!     pub protocol: String,
//!
//!     #[env("note=Remote hostname")]
//!     pub remote_host: String,
//!
//!     #[env("default=443")]
//!     pub port: u16,
//! }
//!
//! # fn main() -> Result<(), envfields::Error> {
//! #     std::env::set_var("REMOTE_HOST", "localhost");
//! #     std::env::set_var("PORT", "80");
//! let mut config = Config::default();
//! envfields::init(&mut config)?;
//! #     assert_eq!(config.protocol, "https");
//! #     assert_eq!(config.remote_host, "localhost");
//! #     assert_eq!(config.port, 80);
//! #     Ok(())
//! # }
//! ```
//!
//! # The `#[env("...")]` annotation
//!
//! A comma-separated directive string per field. A backslash escapes the
//! next character, so defaults and notes may contain commas
//! (`default=a\,b`).
//!
//! | Directive | Meaning |
//! |---|---|
//! | `-` | skip this field entirely |
//! | `optional` | a missing value leaves the field untouched |
//! | `nested` | descend into this field's struct (which must derive `EnvFields`) |
//! | `default=<value>` | fall back to `<value>` when no key is set |
//! | `note=<value>` | free-text note, surfaced by the [`docs`] tables |
//! | anything else | custom key override: that exact name becomes the sole key |
//!
//! ```rust
//! # use envfields::EnvFields;
//! #[derive(Debug, Default, EnvFields)]
//! pub struct CassandraConfig {
//!     #[env("optional")]
//!     pub ssl_cert: String,
//!
//!     #[env("CASSANDRA_CONTACT_POINTS,default=127.0.0.1")]
//!     pub hosts: Vec<String>,
//! }
//!
//! #[derive(Debug, Default, EnvFields)]
//! pub struct Config {
//!     #[env("nested")]
//!     pub cassandra: CassandraConfig,
//! }
//! # fn main() -> Result<(), envfields::Error> {
//! #     let mut config = Config::default();
//! #     envfields::init(&mut config)?;
//! #     assert_eq!(config.cassandra.hosts, ["127.0.0.1"]);
//! #     Ok(())
//! # }
//! ```
//!
//! # Two-phase loading
//!
//! [`parse`] walks the struct without touching the environment and returns
//! the flat [`ConfInfo`] descriptor list, so field metadata can be inspected
//! (or rendered with [`docs`]) before — or instead of — populating values:
//!
//! ```rust
//! # use envfields::EnvFields;
//! # #[derive(Debug, Default, EnvFields)]
//! # struct Config {
//! #     #[env("default=https")]
//! #     pub protocol: String,
//! # }
//! # fn main() -> Result<(), envfields::Error> {
//! let mut config = Config::default();
//! let mut info = envfields::parse(&mut config)?;
//! for field in &info {
//!     println!("{}: {:?}", field.name(), field.keys());
//! }
//! info.read()?;
//! # Ok(())
//! # }
//! ```

pub mod docs;

mod error;
mod field;
mod path;
mod tokenizer;
mod value;

pub use envfields_derive::EnvFields;
pub use error::Error;
pub use field::{ConfInfo, Context, Field, FieldSpec};
pub use path::FieldPath;
pub use value::{Unmarshal, Value};

/// Settings for one [`init`]/[`parse`] invocation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Outermost path segment prepended to every field's structural path.
    pub prefix: String,

    /// Treat every field as optional: missing values are never an error.
    pub all_optional: bool,

    /// Silently skip non-`pub` fields instead of failing with
    /// [`Error::UnexportedField`].
    pub allow_unexported: bool,
}

/// A configuration struct whose fields can be walked.
///
/// Implemented with `#[derive(EnvFields)]`; the derive registers one
/// descriptor per leaf field and recurses into fields tagged `nested`.
pub trait EnvFields {
    /// Appends a descriptor for each leaf field to `info`, depth-first in
    /// declaration order.
    fn visit_fields<'a>(&'a mut self, ctx: &Context, info: &mut ConfInfo<'a>)
        -> Result<(), Error>;
}

/// Populates `conf` from the environment using default [`Options`].
pub fn init<T: EnvFields>(conf: &mut T) -> Result<(), Error> {
    init_with_options(conf, Options::default())
}

/// Populates `conf` from the environment, with `prefix` prepended as the
/// outermost path segment of every key.
pub fn init_with_prefix<T: EnvFields>(conf: &mut T, prefix: &str) -> Result<(), Error> {
    init_with_options(
        conf,
        Options {
            prefix: prefix.to_string(),
            ..Options::default()
        },
    )
}

/// Populates `conf` from the environment with full [`Options`].
pub fn init_with_options<T: EnvFields>(conf: &mut T, options: Options) -> Result<(), Error> {
    let mut info = parse_with_options(conf, options)?;
    info.read()
}

/// Walks `conf` and returns its field descriptors without reading the
/// environment. Call [`ConfInfo::read`] to populate values later.
pub fn parse<T: EnvFields>(conf: &mut T) -> Result<ConfInfo<'_>, Error> {
    parse_with_options(conf, Options::default())
}

/// Like [`parse`], with `prefix` prepended as the outermost path segment.
pub fn parse_with_prefix<'a, T: EnvFields>(
    conf: &'a mut T,
    prefix: &str,
) -> Result<ConfInfo<'a>, Error> {
    parse_with_options(
        conf,
        Options {
            prefix: prefix.to_string(),
            ..Options::default()
        },
    )
}

/// Like [`parse`], with full [`Options`].
pub fn parse_with_options<'a, T: EnvFields>(
    conf: &'a mut T,
    options: Options,
) -> Result<ConfInfo<'a>, Error> {
    let ctx = Context::root(&options);
    let mut info = ConfInfo::new();
    conf.visit_fields(&ctx, &mut info)?;
    Ok(info)
}
