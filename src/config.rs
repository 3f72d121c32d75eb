use anyhow::{bail, Context, Result};

const INFURA_MAINNET_URL: &str = "https://mainnet.infura.io/v3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testnet,
    Production,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub host: String,
    pub port: u16,

    // MySQL (afilliateprogram table)
    pub database: DatabaseConfig,

    // Ethereum JSON-RPC (transaction lookups)
    pub eth_rpc_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let required = |key: &str| lookup(key).with_context(|| format!("{} required", key));

        let environment = Self::parse_environment(&var("ENVIRONMENT", "development"))?;

        let database = DatabaseConfig {
            host: required("DB_HOST")?,
            user: required("DB_USER")?,
            password: var("DB_PASSWORD", ""),
            name: required("DB_NAME")?,
            port: var("DB_PORT", "3306").parse().context("Invalid DB_PORT")?,
            max_connections: var("DB_MAX_CONNECTIONS", "5")
                .parse()
                .context("Invalid DB_MAX_CONNECTIONS")?,
        };

        let eth_rpc_url = match (lookup("ETH_RPC_URL"), lookup("INFURA_API_KEY")) {
            (Some(url), _) => url,
            (None, Some(key)) => format!("{}/{}", INFURA_MAINNET_URL, key),
            (None, None) => bail!("ETH_RPC_URL or INFURA_API_KEY required"),
        };

        let config = Self {
            environment,
            host: var("HOST", "0.0.0.0"),
            port: var("PORT", "3000").parse().context("Invalid PORT")?,
            database,
            eth_rpc_url,
        };

        config.validate()?;
        Ok(config)
    }

    fn parse_environment(env: &str) -> Result<Environment> {
        match env.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testnet" | "test" => Ok(Environment::Testnet),
            "production" | "prod" => Ok(Environment::Production),
            _ => bail!("Unknown environment: {}", env),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.eth_rpc_url.starts_with("http") {
            bail!("ETH_RPC_URL must be HTTP(S) URL");
        }
        if self.database.max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        tracing::info!(
            "Configuration validated for {:?} environment",
            self.environment
        );

        Ok(())
    }
}
