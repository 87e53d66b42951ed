use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static DEFAULT_CONFIG: &str = include_str!("../../default.toml");

mod log_level;
pub use log_level::LogLevel;

/// The configuration file looked up by [`Config::load_default`]
pub const CONFIG_FILE: &str = "pexfeed.toml";

/// The environment variable the credential is read from, on every request
pub const API_KEY_VAR: &str = "VITE_PEXELS_API_KEY";

/// Upstream API settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Api {
    /// A fixed credential. Empty means "read it from the environment"
    pub api_key: Option<String>,
    /// Overrides `https://api.pexels.com`
    pub base_url: Option<String>,
}

/// Configuration for the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The log level to use for the console output
    pub log_level: LogLevel,
    /// The upstream api configuration
    pub api: Api,
}

impl Config {
    /// Loads the configuration from a toml file
    pub async fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        Self::parse(&data)
    }

    /// Loads `pexfeed.toml` from the current directory, or the default configuration if it doesn't exist
    pub async fn load_default() -> anyhow::Result<Self> {
        if tokio::fs::metadata(CONFIG_FILE).await.is_err() {
            log::debug!("{} wasn't found, using the default configuration", CONFIG_FILE);
            return Self::parse(DEFAULT_CONFIG);
        }
        Self::load(CONFIG_FILE).await
    }

    pub fn parse(data: &str) -> anyhow::Result<Self> {
        toml::from_str(data).with_context(|| "invalid config toml")
    }

    /// The fixed api key, if one was configured and isn't empty
    pub fn api_key(&self) -> Option<&str> {
        self.api.api_key.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// The default configuration, commented
    pub fn default_toml() -> &'static str {
        DEFAULT_CONFIG
    }
}

/// Installs a terminal logger for this crate at `level`
///
/// `RUST_LOG` takes precedence if it was already set
pub fn init_logger(level: LogLevel) -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", format!("pexfeed={}", level.as_str()));
    }

    let opts = alto_logger::Options::default()
        .with_time(alto_logger::options::TimeConfig::date_time_format("%c"));
    let logger = alto_logger::TermLogger::new(opts)
        .map_err(|err| anyhow::anyhow!("cannot create logger: {}", err))?;
    alto_logger::init(logger).map_err(|err| anyhow::anyhow!("cannot install logger: {}", err))?;

    log::set_max_level(level.into());
    Ok(())
}

/// Load environment variables from `.env` (or ../.env)
pub fn load_env() -> anyhow::Result<()> {
    match load_env_from_file(".env") {
        Ok(ok) => ok,
        // try the parent
        Err(err) => load_env_from_file("../.env").context(err)?,
    }
    .into_iter()
    .inspect(|(k, v)| log::trace!("setting: {} to _ (len: {})", k, v.len()))
    .for_each(|(k, v)| std::env::set_var(k, v));
    Ok(())
}

/// Load environment variables from a file, into a HashMap
pub fn load_env_from_file(
    file: impl AsRef<std::path::Path>,
) -> anyhow::Result<HashMap<String, String>> {
    let file = file.as_ref();
    let data = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read env file '{}'", file.display()))?;
    Ok(parse_env(&data))
}

fn parse_env(data: &str) -> HashMap<String, String> {
    data.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.starts_with('#'))
        .filter_map(|line| {
            let mut line = line.splitn(2, '=').map(str::trim);
            let (k, v) = (line.next()?, line.next()?);
            (k.to_string(), v.trim_matches('"').to_string()).into()
        })
        .collect()
}
