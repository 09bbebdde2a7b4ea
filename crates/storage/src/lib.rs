use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod dto;
pub mod error;
pub mod models;
pub mod password;
pub mod repository;

use error::Result;

/// Shared handle to the SQLite pool plus the settings repositories need.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    password_cost: u32,
}

impl Database {
    /// Connect to the database at `database_url`, creating the file if needed.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool,
            password_cost: password::DEFAULT_COST,
        })
    }

    /// Private in-memory database with migrations applied.
    ///
    /// An in-memory SQLite database lives as long as its connection, so the
    /// pool is pinned to a single connection that never idles out.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self {
            pool,
            password_cost: password::DEFAULT_COST,
        };
        db.run_migrations().await?;

        Ok(db)
    }

    /// Override the bcrypt cost used when hashing new passwords.
    pub fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_cost = cost;
        self
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn password_cost(&self) -> u32 {
        self.password_cost
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
