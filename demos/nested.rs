//! Example demonstrating nested sections and a key prefix

use envfields::EnvFields;

#[derive(Debug, Default, EnvFields)]
struct CassandraConfig {
    #[env("default=127.0.0.1")]
    pub hosts: Vec<String>,

    #[env("default=9042")]
    pub port: u16,

    #[env("optional,note=Path to the client certificate")]
    pub ssl_cert: String,
}

#[derive(Debug, Default, EnvFields)]
struct Config {
    #[env("nested")]
    pub cassandra: CassandraConfig,

    #[env("default=info")]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    // With the prefix "myapp", nested paths expand to keys such as
    // MYAPP_CASSANDRA_SSL_CERT (and MYAPP_CASSANDRA_SSLCERT, plus the
    // lowercase spellings).
    std::env::set_var("MYAPP_CASSANDRA_HOSTS", "10.0.0.1,10.0.0.2");
    std::env::set_var("MYAPP_CASSANDRA_SSL_CERT", "/etc/ssl/client.pem");

    let mut config = Config::default();
    envfields::init_with_prefix(&mut config, "myapp")?;

    println!("Cassandra hosts: {:?}", config.cassandra.hosts);
    println!("Cassandra port: {}", config.cassandra.port);
    println!("Cassandra cert: {}", config.cassandra.ssl_cert);
    println!("Log level: {}", config.log_level);

    Ok(())
}
