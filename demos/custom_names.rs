//! Example demonstrating custom key overrides

use envfields::EnvFields;

#[derive(Debug, Default, EnvFields)]
struct Config {
    // A bare directive token overrides key derivation entirely: the
    // connection string is read from DB_CONNECTION_STRING and nothing else.
    #[env("DB_CONNECTION_STRING")]
    pub database_url: String,

    #[env("REDIS_URL")]
    pub cache_url: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DB_CONNECTION_STRING", "postgres://localhost/db");
    std::env::set_var("REDIS_URL", "redis://localhost");

    let mut config = Config::default();
    envfields::init(&mut config)?;

    println!("Database URL: {}", config.database_url);
    println!("Cache URL: {}", config.cache_url);

    Ok(())
}
