//! Basic usage example

use envfields::EnvFields;

#[derive(Debug, Default, EnvFields)]
struct Config {
    // Required field: found under DATABASE_URL, DATABASEURL, or their
    // lowercase spellings
    pub database_url: String,

    // With default value
    #[env("default=127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[env("default=10")]
    pub max_connections: u32,

    // Boolean type
    #[env("default=false")]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Load configuration
    let mut config = Config::default();
    envfields::init(&mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    Ok(())
}
