//! Server Config

use clap::Args;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "8698")]
    pub port: u16,

    /// Path segment the cart routes are mounted under
    #[arg(long, env = "CARTS_COLLECTION", default_value = "carts")]
    pub collection: String,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Collection segment without surrounding slashes.
    #[must_use]
    pub fn collection_path(&self) -> &str {
        self.collection.trim_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(collection: &str) -> ServerRuntimeConfig {
        ServerRuntimeConfig {
            host: "127.0.0.1".to_string(),
            port: 8698,
            collection: collection.to_string(),
        }
    }

    #[test]
    fn socket_addr_joins_host_and_port() {
        assert_eq!(config("carts").socket_addr(), "127.0.0.1:8698");
    }

    #[test]
    fn collection_path_strips_slashes() {
        assert_eq!(config("/carts/").collection_path(), "carts");
        assert_eq!(config("carts").collection_path(), "carts");
    }
}
