use anyhow::Context;
use std::env;

const DEFAULT_PORT: u16 = 3002;

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").inspect_err(|_| error!("DATABASE_URL is not set"))?;
        let jwt_secret =
            env::var("JWT_SECRET").inspect_err(|_| error!("JWT_SECRET is not set"))?;

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse()
                .inspect_err(|_| error!(%port, "PORT is not a valid port number"))
                .context("invalid PORT")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}
