use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Static site
    pub static_dir: PathBuf,
    pub index_path: String,

    // CORS: "*" or a comma-separated list of origins
    pub cors_allow_origin: String,

    // Optional JSON file replacing the built-in activity seed
    pub activities_seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,

            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
            index_path: "/static/index.html".to_string(),

            cors_allow_origin: "*".to_string(),

            activities_seed_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source; unset keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port.parse().map_err(|e| format!("Invalid port: {}", e))?;
        }

        if let Some(static_dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(static_dir);
        }

        if let Some(index_path) = lookup("INDEX_PATH") {
            if !index_path.starts_with('/') {
                return Err(format!(
                    "Invalid index_path: {} (must be an absolute URL path)",
                    index_path
                ));
            }
            config.index_path = index_path;
        }

        if let Some(origin) = lookup("CORS_ALLOW_ORIGIN") {
            config.cors_allow_origin = origin;
        }

        if let Some(seed) = lookup("ACTIVITIES_SEED_PATH") {
            if !seed.trim().is_empty() {
                config.activities_seed_path = Some(PathBuf::from(seed));
            }
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
