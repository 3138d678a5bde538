//! Example demonstrating optional fields and the all_optional setting

use envfields::{EnvFields, Options};

#[derive(Debug, Default, EnvFields)]
struct Config {
    pub api_key: String,

    // Missing values leave optional fields at their current value
    #[env("optional")]
    pub trace_endpoint: String,

    #[env("optional")]
    pub sample_rate: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("API_KEY", "secret123");

    let mut config = Config::default();
    envfields::init(&mut config)?;

    println!("API key: {}", config.api_key);
    println!("Trace endpoint: {:?}", config.trace_endpoint);
    println!("Sample rate: {:?}", config.sample_rate);

    // all_optional treats every field as optional, useful for smoke tests
    // or partial environments
    let mut partial = Config::default();
    std::env::remove_var("API_KEY");
    envfields::init_with_options(
        &mut partial,
        Options {
            all_optional: true,
            ..Options::default()
        },
    )?;
    println!("Partial config: {partial:?}");

    Ok(())
}
