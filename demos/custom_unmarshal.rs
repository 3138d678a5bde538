//! Example implementing Unmarshal for a user-defined type

use envfields::{EnvFields, Error, Unmarshal};

#[derive(Debug, Default, PartialEq)]
enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Unmarshal for LogFormat {
    fn unmarshal(s: &str) -> Result<Self, Error> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::parse_error::<LogFormat>(
                other,
                "expected 'text' or 'json'",
            )),
        }
    }
}

#[derive(Debug, Default, EnvFields)]
struct Config {
    #[env("default=text")]
    pub log_format: LogFormat,

    // Vec elements go through Unmarshal too
    #[env("default=text\\,json")]
    pub accepted_formats: Vec<LogFormat>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("LOG_FORMAT", "json");

    let mut config = Config::default();
    envfields::init(&mut config)?;

    println!("Log format: {:?}", config.log_format);
    println!("Accepted formats: {:?}", config.accepted_formats);

    Ok(())
}
