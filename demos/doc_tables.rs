//! Example rendering configuration documentation tables

use envfields::{docs, EnvFields};

#[derive(Debug, Default, EnvFields)]
struct Config {
    #[env("default=https,note=Protocol to be used")]
    pub protocol: String,

    #[env("note=Remote hostname")]
    pub remote_host: String,

    #[env("default=443")]
    pub port: i32,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("REMOTE_HOST", "localhost");
    std::env::set_var("PORT", "80");

    let mut config = Config::default();
    let mut info = envfields::parse(&mut config)?;
    info.read()?;

    println!("{}", docs::text_table(&info));
    println!();
    println!("{}", docs::html_table(&info)?);

    Ok(())
}
