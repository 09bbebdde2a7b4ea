use anyhow::{Context, Result, ensure};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_seconds: i64,
    pub bcrypt_cost: u32,
}

const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3600;

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let jwt_secret = var("JWT_SECRET").context("Cannot load JWT_SECRET env variable")?;
        ensure!(!jwt_secret.is_empty(), "JWT_SECRET must not be empty");

        let token_ttl_seconds = match var("TOKEN_TTL_SECONDS") {
            Some(value) => value
                .parse()
                .context("TOKEN_TTL_SECONDS must be a number of seconds")?,
            None => DEFAULT_TOKEN_TTL_SECONDS,
        };
        ensure!(
            token_ttl_seconds > 0,
            "TOKEN_TTL_SECONDS must be positive, got {token_ttl_seconds}"
        );

        Ok(Self {
            host: var("HOST").context("Cannot load HOST env variable")?,
            port: var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: var("DATABASE_URL").context("Cannot load DATABASE_URL env variable")?,
            jwt_secret,
            token_ttl_seconds,
            bcrypt_cost: match var("BCRYPT_COST") {
                Some(value) => value.parse().context("BCRYPT_COST must be a number")?,
                None => storage::password::DEFAULT_COST,
            },
        })
    }
}
