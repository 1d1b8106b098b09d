use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pack: PackConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub pokemon_tcg: CatalogProviderConfig,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct CatalogProviderConfig {
    /// Catalog API key. May stay empty for anonymous, rate-limited access.
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: Self::default_bind(),
        }
    }
}

impl ServerConfig {
    fn default_bind() -> String {
        "127.0.0.1:8807".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PackConfig {
    /// Pack size used when a request does not specify one.
    #[serde(default = "PackConfig::default_count")]
    pub default_count: usize,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            default_count: Self::default_count(),
        }
    }
}

impl PackConfig {
    const fn default_count() -> usize {
        5
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("packrs");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'packrs init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!("Loaded config from {}", config_path.display());

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("packrs");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "providers": {
    "pokemon_tcg": {
      "api_key": "your-pokemon-tcg-api-key-here"
    }
  },
  "server": {
    "bind": "127.0.0.1:8807"
  },
  "pack": {
    "default_count": 5
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and add your Pokemon TCG API key");
        println!("      (leave it empty for anonymous, rate-limited access)");
        println!("   2. Run 'packrs serve' to start the pack service");
        println!("   3. Run 'packrs draw' to print a pack from the command line");
        println!();
        println!("🔧 Configuration options:");
        println!("   - server.bind: address the HTTP service listens on");
        println!("   - pack.default_count: pack size when a request names none");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_defaults() {
        let config: Config = match serde_json::from_str(r#"{ "providers": { "pokemon_tcg": {} } }"#)
        {
            Ok(config) => config,
            Err(e) => panic!("minimal config must parse: {e}"),
        };

        assert!(config.providers.pokemon_tcg.api_key.is_empty());
        assert_eq!(config.server.bind, "127.0.0.1:8807");
        assert_eq!(config.pack.default_count, 5);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let json = r#"{
            "providers": { "pokemon_tcg": { "api_key": "abc123" } },
            "server": { "bind": "0.0.0.0:9000" },
            "pack": { "default_count": 10 }
        }"#;
        let config: Config = match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => panic!("full config must parse: {e}"),
        };

        assert_eq!(config.providers.pokemon_tcg.api_key, "abc123");
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.pack.default_count, 10);
    }
}
