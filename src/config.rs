use crate::error::{Error, Result};
use std::env;

const DEFAULT_CONCURRENCY_LIMIT: usize = 4;
const DEFAULT_DISPLAY_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct Config {
    pub concurrency_limit: usize,
    pub display_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Build from any variable lookup, `env::var` in production.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, env::VarError>,
    {
        let concurrency_limit = parse_var(&lookup, "KWINSIGHT_CONCURRENCY_LIMIT")?
            .unwrap_or(DEFAULT_CONCURRENCY_LIMIT);
        let display_limit =
            parse_var(&lookup, "KWINSIGHT_DISPLAY_LIMIT")?.unwrap_or(DEFAULT_DISPLAY_LIMIT);

        if concurrency_limit == 0 {
            return Err(Error::Config(
                "KWINSIGHT_CONCURRENCY_LIMIT must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            concurrency_limit,
            display_limit,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

fn parse_var<F>(lookup: &F, name: &str) -> Result<Option<usize>>
where
    F: Fn(&str) -> std::result::Result<String, env::VarError>,
{
    match lookup(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} must be a positive integer, got '{}'", name, raw))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(Error::Config(format!("{} is not valid unicode", name)))
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub concurrency_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            concurrency_limit: config.concurrency_limit,
        }
    }
}
