// Derived structs also parse from parenthesized tokens, so they can be
// elements of a Vec field. Skipped fields take their default and do not
// count toward the token's part count.

use envfields::{EnvFields, Unmarshal};

#[derive(Debug, Default, PartialEq, EnvFields)]
struct Endpoint {
    pub host: String,

    pub port: u16,

    #[env("-")]
    pub healthy: bool,
}

fn main() {
    let endpoints = Vec::<Endpoint>::unmarshal("(localhost,80),(example.com,443)").unwrap();
    assert_eq!(endpoints.len(), 2);
    assert_eq!(
        endpoints[1],
        Endpoint {
            host: "example.com".to_string(),
            port: 443,
            healthy: false,
        },
    );
}
