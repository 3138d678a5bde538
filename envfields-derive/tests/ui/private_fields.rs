// Private fields fail the walk unless allow_unexported is set, in which
// case they are silently skipped.

use envfields::{EnvFields, Error, Options};

#[derive(Debug, Default, EnvFields)]
struct Config {
    #[env("default=https")]
    pub protocol: String,

    counter: u32,
}

fn main() {
    let mut conf = Config::default();

    let err = envfields::init(&mut conf).unwrap_err();
    assert!(matches!(err, Error::UnexportedField { field: "counter" }));

    let options = Options {
        allow_unexported: true,
        ..Options::default()
    };
    envfields::init_with_options(&mut conf, options).unwrap();
    assert_eq!(conf.counter, 0);
}
