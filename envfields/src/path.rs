//! Structural field paths and environment key derivation

use std::collections::BTreeSet;
use std::fmt;

/// The structural path of a field, from the outermost struct down to the
/// leaf, e.g. `["Cassandra", "SslCert"]`.
///
/// Paths are immutable: [`append`](FieldPath::append) returns a new path
/// backed by its own storage, so a parent path can be reused for any number
/// of children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// An empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new path with `segment` appended.
    pub fn append(&self, segment: &str) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend(self.0.iter().cloned());
        segments.push(segment.to_string());
        Self(segments)
    }

    /// Derives every environment key spelling a user might plausibly set for
    /// this path, sorted lexicographically.
    ///
    /// Segments are joined with `_` in two ways: a compact form that keeps
    /// each segment as written, and a word-boundary form that inserts an
    /// extra `_` before an uppercase letter adjacent to a lowercase one
    /// (`SslCert` becomes `Ssl_Cert`, `SSLCert` becomes `SSL_Cert`). Both
    /// are emitted in upper and lower case, deduplicated:
    ///
    /// ```
    /// use envfields::FieldPath;
    ///
    /// let path = FieldPath::new().append("Cassandra").append("SslCert");
    /// assert_eq!(
    ///     path.keys(),
    ///     ["CASSANDRA_SSLCERT", "CASSANDRA_SSL_CERT", "cassandra_ssl_cert", "cassandra_sslcert"],
    /// );
    /// ```
    pub fn keys(&self) -> Vec<String> {
        // compact keeps segments as written; words gets the extra
        // underscores at casing boundaries
        let mut compact = String::new();
        let mut words = String::new();

        for (j, segment) in self.0.iter().enumerate() {
            if j > 0 {
                compact.push('_');
                words.push('_');
            }

            let chars: Vec<char> = segment.chars().collect();
            for (i, &c) in chars.iter().enumerate() {
                let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                let prev_lower = i > 0 && chars[i - 1].is_lowercase();
                if i > 0 && c.is_uppercase() && (next_lower || prev_lower) {
                    words.push('_');
                }
                compact.push(c);
                words.push(c);
            }
        }

        let mut set = BTreeSet::new();
        set.insert(compact.to_uppercase());
        set.insert(compact.to_lowercase());
        set.insert(words.to_uppercase());
        set.insert(words.to_lowercase());
        set.into_iter().collect()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> FieldPath {
        segments
            .iter()
            .fold(FieldPath::new(), |p, s| p.append(s))
    }

    #[test]
    fn keys_single_segment_with_boundaries() {
        assert_eq!(
            path(&["CassandraSslCert"]).keys(),
            [
                "CASSANDRASSLCERT",
                "CASSANDRA_SSL_CERT",
                "cassandra_ssl_cert",
                "cassandrasslcert",
            ],
        );
    }

    #[test]
    fn keys_collapses_uppercase_runs() {
        assert_eq!(
            path(&["CassandraSSLCert"]).keys(),
            [
                "CASSANDRASSLCERT",
                "CASSANDRA_SSL_CERT",
                "cassandra_ssl_cert",
                "cassandrasslcert",
            ],
        );
    }

    #[test]
    fn keys_multi_segment() {
        assert_eq!(
            path(&["Cassandra", "SslCert"]).keys(),
            [
                "CASSANDRA_SSLCERT",
                "CASSANDRA_SSL_CERT",
                "cassandra_ssl_cert",
                "cassandra_sslcert",
            ],
        );
    }

    #[test]
    fn keys_multi_segment_uppercase_run() {
        assert_eq!(
            path(&["Cassandra", "SSLCert"]).keys(),
            [
                "CASSANDRA_SSLCERT",
                "CASSANDRA_SSL_CERT",
                "cassandra_ssl_cert",
                "cassandra_sslcert",
            ],
        );
    }

    #[test]
    fn keys_without_boundary_yield_two() {
        assert_eq!(path(&["Name"]).keys(), ["NAME", "name"]);
    }

    #[test]
    fn append_leaves_parent_untouched() {
        let parent = path(&["Cassandra"]);
        let a = parent.append("SslCert");
        let b = parent.append("Hosts");
        assert_eq!(parent.to_string(), "Cassandra");
        assert_eq!(a.to_string(), "Cassandra.SslCert");
        assert_eq!(b.to_string(), "Cassandra.Hosts");
    }

    #[test]
    fn display_joins_with_dots() {
        assert_eq!(path(&["A", "B", "C"]).to_string(), "A.B.C");
    }
}
