// Nested sections behind Option and Box are traversed transparently,
// allocating defaults along the way.

use envfields::EnvFields;

#[derive(Debug, Default, EnvFields)]
struct Inner {
    #[env("default=127.0.0.1")]
    pub host: String,
}

#[derive(Debug, Default, EnvFields)]
struct Outer {
    #[env("nested")]
    pub plain: Inner,

    #[env("nested")]
    pub boxed: Box<Inner>,

    #[env("nested")]
    pub lazy: Option<Inner>,
}

fn main() {
    let mut conf = Outer::default();
    envfields::init(&mut conf).unwrap();

    assert_eq!(conf.plain.host, "127.0.0.1");
    assert_eq!(conf.boxed.host, "127.0.0.1");
    assert_eq!(conf.lazy.unwrap().host, "127.0.0.1");
}
